//! Slow request logging.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};

/// Logs at `WARN` every request that takes longer than the threshold held in
/// the middleware state.
///
/// ```rust,ignore
/// router.layer(middleware::from_fn_with_state(
///     Duration::from_millis(4000),
///     request_time::layer,
/// ));
/// ```
pub async fn layer(State(threshold): State<Duration>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    if elapsed > threshold {
        tracing::warn!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            ms = elapsed.as_millis() as u64,
            "Request [{method}] at {path} took {} ms",
            elapsed.as_millis()
        );
    }

    response
}
