//! DTOs for account endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::application::services::Registration;
use crate::application::services::account_service::DEFAULT_ROLE_ID;

/// Request body for `POST /api/account/register`.
///
/// Email uniqueness is checked by the account service after these rules pass.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is not a valid email address")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub role_id: Option<i64>,
}

impl From<RegisterUserRequest> for Registration {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            nationality: req.nationality,
            role_id: req.role_id.unwrap_or(DEFAULT_ROLE_ID),
        }
    }
}

/// Request body for `POST /api/account/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
