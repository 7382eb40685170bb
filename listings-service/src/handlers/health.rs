use crate::startup::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub database: DatabaseStatus,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: ServiceStatus::Ok,
            database: DatabaseStatus::Up,
            timestamp: Utc::now(),
        }
    }

    pub fn degraded() -> Self {
        Self {
            status: ServiceStatus::Degraded,
            database: DatabaseStatus::Down,
            timestamp: Utc::now(),
        }
    }
}

/// `GET /health`: pings MongoDB and reports the outcome. A failed ping
/// degrades the body rather than the status code, so the response is
/// HTTP 200 either way. Monitoring polls the payload, not the code.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.db.ping().await {
        Ok(()) => Json(HealthResponse::ok()),
        Err(e) => {
            tracing::warn!("Database liveness probe failed: {}", e);
            Json(HealthResponse::degraded())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_payload_reports_database_up() {
        let before = Utc::now();
        let response = HealthResponse::ok();
        let after = Utc::now();

        assert_eq!(response.status, ServiceStatus::Ok);
        assert_eq!(response.database, DatabaseStatus::Up);
        assert!(response.timestamp >= before && response.timestamp <= after);
    }

    #[test]
    fn degraded_payload_reports_database_down() {
        let before = Utc::now();
        let response = HealthResponse::degraded();
        let after = Utc::now();

        assert_eq!(response.status, ServiceStatus::Degraded);
        assert_eq!(response.database, DatabaseStatus::Down);
        assert!(response.timestamp >= before && response.timestamp <= after);
    }

    #[test]
    fn statuses_serialize_to_the_wire_strings() {
        let ok = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["database"], "up");

        let degraded = serde_json::to_value(HealthResponse::degraded()).unwrap();
        assert_eq!(degraded["status"], "degraded");
        assert_eq!(degraded["database"], "down");
    }

    #[test]
    fn timestamp_serializes_as_iso_8601() {
        let value = serde_json::to_value(HealthResponse::ok()).unwrap();
        let raw = value["timestamp"].as_str().expect("timestamp missing");

        let parsed: DateTime<Utc> = raw.parse().expect("timestamp is not ISO-8601");
        assert_eq!(serde_json::to_value(parsed).unwrap().as_str(), Some(raw));
    }

    #[test]
    fn status_enums_round_trip_only_the_known_variants() {
        assert!(serde_json::from_str::<ServiceStatus>("\"ok\"").is_ok());
        assert!(serde_json::from_str::<ServiceStatus>("\"degraded\"").is_ok());
        assert!(serde_json::from_str::<ServiceStatus>("\"unhealthy\"").is_err());

        assert!(serde_json::from_str::<DatabaseStatus>("\"up\"").is_ok());
        assert!(serde_json::from_str::<DatabaseStatus>("\"down\"").is_ok());
        assert!(serde_json::from_str::<DatabaseStatus>("\"unknown\"").is_err());
    }
}
