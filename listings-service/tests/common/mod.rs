use listings_service::config::{ListingsConfig, MongoConfig};
use listings_service::services::MongoDb;
use listings_service::startup::Application;
use service_core::config::Config as CoreConfig;
use service_core::middleware::ThrottleConfig;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    /// Spawn against the local MongoDB used by integration tests.
    pub async fn spawn() -> Self {
        Self::spawn_with("mongodb://localhost:27017", 200).await
    }

    /// Spawn against an arbitrary URI. Pointing at a closed port exercises
    /// the degraded health path without any infrastructure. The config is
    /// built directly instead of via env vars so parallel tests cannot race
    /// on the process environment.
    pub async fn spawn_with(uri: &str, throttle_limit: u32) -> Self {
        let db_name = format!("listings_test_{}", Uuid::new_v4().simple());

        let config = ListingsConfig {
            common: CoreConfig {
                port: 0, // Random port for testing
                log_level: "info".to_string(),
            },
            mongodb: MongoConfig {
                uri: uri.to_string(),
                database: db_name.clone(),
                server_selection_timeout_ms: 300,
            },
            throttle: ThrottleConfig {
                ttl: 60,
                limit: throttle_limit,
                name: "test".to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
