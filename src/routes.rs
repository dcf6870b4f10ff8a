//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check (public)
//! - `/api/account/*`            - Registration and login (public, rate limited)
//! - `GET  /api/restaurant`      - Restaurant listing (public)
//! - `/api/restaurant/*`         - Everything else (Bearer token required)
//!
//! # Middleware
//!
//! - **Panic recovery** - Panics become a 500 with the standard error body
//! - **Tracing** - Structured request/response logging
//! - **Request timing** - Slow requests logged at WARN
//! - **Rate limiting** - Per-IP token bucket on account routes
//! - **Authentication** - JWT Bearer token
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, request_time, tracing};
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use serde_json::json;
use std::any::Any;
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router behaviour that depends on deployment.
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// Read client IPs from forwarding headers for rate limiting. Enable
    /// only behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Rate limit the account routes. Per-IP limiting needs the peer
    /// address, so routers served without connect info must disable it.
    pub rate_limit_enabled: bool,
    pub slow_request_threshold: Duration,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            behind_proxy: false,
            rate_limit_enabled: false,
            slow_request_threshold: Duration::from_millis(4000),
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            behind_proxy: config.behind_proxy,
            rate_limit_enabled: config.rate_limit_enabled,
            slow_request_threshold: config.slow_request_threshold(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, options: RouterOptions) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, options))
}

/// Routes and middleware without path normalization.
pub fn build_router(state: AppState, options: RouterOptions) -> Router {
    let mut account_router = api::routes::account_routes();
    if options.rate_limit_enabled {
        account_router = rate_limit::apply(account_router, options.behind_proxy);
    }

    let protected_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = Router::new()
        .merge(account_router)
        .merge(api::routes::public_routes())
        .merge(protected_router);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state);

    with_middleware(router, options)
}

/// Request timing, tracing and panic recovery shared by every route.
fn with_middleware(router: Router, options: RouterOptions) -> Router {
    router
        .layer(middleware::from_fn_with_state(
            options.slow_request_threshold,
            request_time::layer,
        ))
        .layer(tracing::layer())
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    ::tracing::error!(panic = %detail, "Handler panicked");

    AppError::internal("Something went wrong", json!({})).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn failing_handler() -> &'static str {
        panic!("handler failure")
    }

    #[tokio::test]
    async fn test_panic_is_rendered_as_internal_error() {
        let router = with_middleware(
            Router::new().route("/fail", get(failing_handler)),
            RouterOptions::default(),
        );

        let response = router
            .oneshot(Request::builder().uri("/fail").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "internal_error");
        assert_eq!(json["error"]["message"], "Something went wrong");
    }

    #[test]
    fn test_default_options_disable_rate_limit() {
        let options = RouterOptions::default();

        assert!(!options.rate_limit_enabled);
        assert_eq!(options.slow_request_threshold, Duration::from_millis(4000));
    }
}
