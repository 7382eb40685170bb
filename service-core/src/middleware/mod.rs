pub mod rate_limit;

pub use rate_limit::{ThrottleConfig, UnkeyedRateLimiter, create_rate_limiter, rate_limit_middleware};
