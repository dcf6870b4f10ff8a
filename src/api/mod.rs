//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into application service calls and
//! formats responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Body, query and path extractors rejecting with `AppError`
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, rate limiting and observability
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
