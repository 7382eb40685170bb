pub mod health;

pub use health::{health_check, DatabaseStatus, HealthResponse, ServiceStatus};
