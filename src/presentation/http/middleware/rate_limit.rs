// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Seconds after which one request of the quota is replenished.
pub const REPLENISH_INTERVAL_SECS: u64 = 1;
pub const BURST_SIZE: u32 = 30;

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP token bucket. Needs `ConnectInfo<SocketAddr>` (or proxy
/// headers) to identify clients. `None` when the quota is unusable.
#[must_use]
pub fn rate_limit_layer(replenish_secs: u64, burst: u32) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(replenish_secs);
    builder.burst_size(burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}
