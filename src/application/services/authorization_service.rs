//! Policy and resource authorization.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::application::authorization::{
    ALLOWED_NATIONALITIES, CreatedMultipleRestaurantsRequirement, MinimumAgeRequirement,
    NationalityRequirement, Policy, ResourceOperation, ResourceOperationRequirement,
};
use crate::domain::entities::{Principal, Restaurant, Role};
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;

const MINIMUM_AGE: u32 = 20;
const MINIMUM_RESTAURANTS_CREATED: i64 = 2;

/// Evaluates named policies, role checks and per-restaurant operations.
///
/// Every failure is reported as [`AppError::Forbidden`]. The caller has
/// already been authenticated by the time any method here runs.
pub struct AuthorizationService<R: RestaurantRepository + ?Sized> {
    restaurant_repository: Arc<R>,
}

impl<R: RestaurantRepository + ?Sized> AuthorizationService<R> {
    pub fn new(restaurant_repository: Arc<R>) -> Self {
        Self {
            restaurant_repository,
        }
    }

    /// Checks a named policy against the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the policy is not satisfied.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authorize(&self, principal: &Principal, policy: Policy) -> Result<(), AppError> {
        let allowed = match policy {
            Policy::HasNationality => {
                NationalityRequirement::new(ALLOWED_NATIONALITIES).is_satisfied(principal)
            }
            Policy::AtLeast20 => MinimumAgeRequirement::new(MINIMUM_AGE)
                .is_satisfied(principal, Utc::now().date_naive()),
            Policy::CreatedAtLeast2Restaurants => {
                let created = self
                    .restaurant_repository
                    .count_by_creator(principal.user_id)
                    .await?;
                CreatedMultipleRestaurantsRequirement::new(MINIMUM_RESTAURANTS_CREATED)
                    .is_satisfied(created)
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Forbidden",
                json!({ "policy": policy.name() }),
            ))
        }
    }

    /// Checks that the caller holds one of `roles`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] otherwise.
    pub fn require_role(&self, principal: &Principal, roles: &[Role]) -> Result<(), AppError> {
        if principal.is_in_role(roles) {
            return Ok(());
        }

        let names: Vec<&str> = roles.iter().map(|r| r.name()).collect();
        Err(AppError::forbidden(
            "Forbidden",
            json!({ "required_roles": names }),
        ))
    }

    /// Checks that the caller may perform `operation` on `restaurant`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the caller is not the owner of a
    /// restaurant it tries to update or delete.
    pub fn authorize_resource(
        &self,
        principal: &Principal,
        restaurant: &Restaurant,
        operation: ResourceOperation,
    ) -> Result<(), AppError> {
        if ResourceOperationRequirement::new(operation).is_satisfied(principal, restaurant) {
            return Ok(());
        }

        tracing::debug!(
            user_id = principal.user_id,
            restaurant_id = restaurant.id,
            ?operation,
            "Resource operation denied"
        );

        Err(AppError::forbidden(
            "Forbidden",
            json!({ "restaurant_id": restaurant.id }),
        ))
    }
}
