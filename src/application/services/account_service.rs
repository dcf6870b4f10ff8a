//! Account registration and login.

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use crate::application::services::AuthService;
use crate::domain::entities::{NewUser, Role};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Role assigned when a registration names none.
pub const DEFAULT_ROLE_ID: i64 = 1;

/// Registration data whose field rules have already been checked.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub role_id: i64,
}

/// Service registering users and exchanging credentials for access tokens.
pub struct AccountService<U: UserRepository + ?Sized> {
    user_repository: Arc<U>,
    auth_service: Arc<AuthService>,
    bcrypt_cost: u32,
}

impl<U: UserRepository + ?Sized> AccountService<U> {
    /// Creates a new account service.
    pub fn new(user_repository: Arc<U>, auth_service: Arc<AuthService>, bcrypt_cost: u32) -> Self {
        Self {
            user_repository,
            auth_service,
            bcrypt_cost,
        }
    }

    /// Registers a user and returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is taken or the role id
    /// is unknown. Returns [`AppError::Internal`] on database or hashing
    /// errors.
    pub async fn register_user(&self, registration: Registration) -> Result<i64, AppError> {
        if self
            .user_repository
            .email_exists(&registration.email)
            .await?
        {
            return Err(email_taken());
        }

        let role = Role::from_id(registration.role_id).ok_or_else(|| {
            AppError::bad_request(
                "Validation failed",
                json!({ "roleId": ["Unknown role"] }),
            )
        })?;

        let password_hash = hash_password(registration.password, self.bcrypt_cost).await?;

        let id = self
            .user_repository
            .create(NewUser {
                email: registration.email,
                first_name: registration.first_name,
                last_name: registration.last_name,
                date_of_birth: registration.date_of_birth,
                nationality: registration.nationality,
                password_hash,
                role,
            })
            .await
            .map_err(|e| match e {
                // users_email_key, hit by a concurrent registration
                AppError::Conflict { .. } => email_taken(),
                other => other,
            })?;

        tracing::info!(user_id = id, role = %role, "User registered");
        Ok(id)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with "Invalid username or password"
    /// when the credentials do not match.
    pub async fn generate_jwt(&self, email: &str, password: String) -> Result<String, AppError> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            return Err(invalid_credentials());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(invalid_credentials());
        }

        self.auth_service.issue_token(&user)
    }
}

fn email_taken() -> AppError {
    AppError::bad_request(
        "Validation failed",
        json!({ "email": ["That email is taken"] }),
    )
}

fn invalid_credentials() -> AppError {
    AppError::bad_request("Invalid username or password", json!({}))
}
