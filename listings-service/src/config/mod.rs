use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use service_core::middleware::ThrottleConfig;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub throttle: ThrottleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    /// Upper bound on how long a ping waits for a reachable server. Keeps
    /// the degraded health path from hanging on the driver default (30s).
    pub server_selection_timeout_ms: u64,
}

impl ListingsConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ListingsConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("yallamotor"), is_prod)?,
                server_selection_timeout_ms: get_env(
                    "MONGODB_SERVER_SELECTION_TIMEOUT_MS",
                    Some("2000"),
                    is_prod,
                )?
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    AppError::ConfigError(anyhow::anyhow!(e))
                })?,
            },
            throttle: ThrottleConfig {
                ttl: get_env("THROTTLE_TTL", Some("60"), is_prod)?
                    .parse()
                    .map_err(|e: std::num::ParseIntError| {
                        AppError::ConfigError(anyhow::anyhow!(e))
                    })?,
                limit: get_env("THROTTLE_LIMIT", Some("120"), is_prod)?
                    .parse()
                    .map_err(|e: std::num::ParseIntError| {
                        AppError::ConfigError(anyhow::anyhow!(e))
                    })?,
                name: get_env("THROTTLE_NAME", Some("default"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
