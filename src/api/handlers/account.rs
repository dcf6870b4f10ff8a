//! Handlers for registration and login.

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::account::{LoginRequest, RegisterUserRequest};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/account/register`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "jan@test.com",
///   "password": "pass123",
///   "confirmPassword": "pass123",
///   "nationality": "Polish",
///   "dateOfBirth": "1990-05-17",
///   "roleId": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, the email is taken or the
/// role id is unknown.
pub async fn register_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterUserRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state.account_service.register_user(payload.into()).await?;

    Ok(StatusCode::OK)
}

/// Exchanges credentials for an access token.
///
/// # Endpoint
///
/// `POST /api/account/login`
///
/// # Response
///
/// The JWT as a `text/plain` body.
///
/// # Errors
///
/// Returns 400 Bad Request with "Invalid username or password" when the
/// credentials do not match.
pub async fn login_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<String, AppError> {
    state
        .account_service
        .generate_jwt(&payload.email, payload.password)
        .await
}
