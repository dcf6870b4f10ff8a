//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use axum::body::Body;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Replenish one request every `PER_SECOND` seconds.
const PER_SECOND: u64 = 1;
const BURST_SIZE: u32 = 10;

/// Wraps account routes in a per-IP rate limiter.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// With `behind_proxy` the client IP is read from `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded`; enable only behind a trusted reverse proxy.
/// Otherwise the socket peer address is used, which requires serving with
/// `into_make_service_with_connect_info`.
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        match layer(SmartIpKeyExtractor) {
            Some(layer) => router.layer(layer),
            None => router,
        }
    } else {
        match layer(PeerIpKeyExtractor) {
            Some(layer) => router.layer(layer),
            None => router,
        }
    }
}

fn layer<K: KeyExtractor>(
    key_extractor: K,
) -> Option<GovernorLayer<K, NoOpMiddleware<QuantaInstant>, Body>> {
    let Some(config) = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .key_extractor(key_extractor)
        .finish()
    else {
        tracing::error!("Invalid rate limit quota, rate limiting disabled");
        return None;
    };

    Some(GovernorLayer::new(Arc::new(config)))
}
