use crate::config::ListingsConfig;
use crate::handlers;
use crate::services::MongoDb;
use axum::{middleware, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{create_rate_limiter, rate_limit_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ListingsConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            Duration::from_millis(config.mongodb.server_selection_timeout_ms),
        )
        .await?;

        // An unreachable database must not abort startup; /health reports
        // the outage instead.
        if let Err(e) = db.ping().await {
            tracing::warn!("MongoDB unreachable at startup: {}", e);
        }

        let limiter = create_rate_limiter(&config.throttle);
        tracing::info!(
            throttle = %config.throttle.name,
            ttl = config.throttle.ttl,
            limit = config.throttle.limit,
            "Request throttling enabled"
        );

        let state = AppState { db };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .layer(middleware::from_fn_with_state(
                limiter,
                rate_limit_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
