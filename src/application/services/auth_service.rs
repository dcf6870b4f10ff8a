//! JWT issuing and validation.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{Principal, Role, User};
use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Token signing parameters.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC-SHA256 signing key.
    pub key: String,
    /// Used as both `iss` and `aud`.
    pub issuer: String,
    pub expire_days: i64,
}

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    sub: String,
    name: String,
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    iss: String,
    aud: String,
    iat: i64,
    exp: i64,
}

/// Service issuing HS256 access tokens and turning verified tokens back
/// into a [`Principal`].
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    expire_days: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(settings: JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_audience(&[settings.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(settings.key.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.key.as_bytes()),
            validation,
            issuer: settings.issuer,
            expire_days: settings.expire_days,
        }
    }

    /// Issues an access token for `user` valid for the configured number of days.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.issue_token_at(user, Utc::now())
    }

    fn issue_token_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.full_name(),
            role: user.role.name().to_string(),
            date_of_birth: user
                .date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string()),
            nationality: user.nationality.clone(),
            iss: self.issuer.clone(),
            aud: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.expire_days)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!(error = %e, "JWT encoding failed");
                AppError::internal("Token generation failed", json!({}))
            },
        )
    }

    /// Verifies signature, issuer, audience and expiry of a raw token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired or
    /// carries malformed claims.
    pub fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                invalid_token()
            })?;

        let claims = data.claims;

        let user_id = claims.sub.parse::<i64>().map_err(|_| invalid_token())?;
        let role = claims.role.parse::<Role>().map_err(|_| invalid_token())?;
        let date_of_birth = claims
            .date_of_birth
            .map(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT))
            .transpose()
            .map_err(|_| invalid_token())?;

        Ok(Principal {
            user_id,
            name: claims.name,
            role,
            date_of_birth,
            nationality: claims.nationality,
        })
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({"reason": "Invalid or expired token"}),
    )
}
