//! Password hashing with bcrypt.
//!
//! bcrypt is CPU-bound, so both operations run on tokio's blocking pool to
//! keep request workers free.

use crate::error::AppError;
use serde_json::json;

/// Lowest cost bcrypt accepts. Only suitable for tests.
pub const MIN_COST: u32 = 4;

/// Hashes a plaintext password with the given bcrypt cost.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the cost is out of range or the
/// blocking task fails.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            AppError::internal("Password hashing failed", json!({}))
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "bcrypt hash failed");
            AppError::internal("Password hashing failed", json!({}))
        })
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash is treated as a mismatch.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the blocking task fails.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            AppError::internal("Password verification failed", json!({}))
        })?;

    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            Ok(false)
        }
    }
}
