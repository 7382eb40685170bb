use crate::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::Deserialize;
use std::{num::NonZeroU32, sync::Arc, time::Duration};

/// Throttle settings: at most `limit` requests per `ttl`-second window.
/// `name` labels the guard in logs when a service runs several of them.
#[derive(Debug, Clone, Deserialize)]
pub struct ThrottleConfig {
    pub ttl: u64,
    pub limit: u32,
    pub name: String,
}

/// Rate limiter for global/unkeyed use
pub type UnkeyedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Create an unkeyed rate limiter from a throttle declaration
pub fn create_rate_limiter(throttle: &ThrottleConfig) -> UnkeyedRateLimiter {
    let limit = throttle.limit.max(1);
    let window_ms = throttle.ttl.max(1) * 1000;
    let period = Duration::from_millis(window_ms / limit as u64);
    let quota = Quota::with_period(period)
        .expect("Failed to create quota with valid period")
        .allow_burst(NonZeroU32::new(limit).expect("limit is guaranteed to be non-zero"));

    Arc::new(RateLimiter::direct(quota))
}

/// Middleware for unkeyed rate limiting
pub async fn rate_limit_middleware(
    State(limiter): State<UnkeyedRateLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match limiter.check() {
        Ok(_) => Ok(next.run(request).await),
        Err(negative) => {
            let wait_time = negative.wait_time_from(DefaultClock::default().now());
            Err(AppError::TooManyRequests(
                "Too many requests. Please try again later.".to_string(),
                Some(wait_time.as_secs()),
            ))
        }
    }
}
