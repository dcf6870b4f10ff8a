//! Authorization requirements and named policies.
//!
//! Each requirement is a pure predicate over the caller's [`Principal`]
//! and, where needed, a resource or a count loaded by
//! [`AuthorizationService`](crate::application::services::AuthorizationService).
//!
//! [`Principal`]: crate::domain::entities::Principal

pub mod created_restaurants;
pub mod minimum_age;
pub mod nationality;
pub mod resource_operation;

pub use created_restaurants::CreatedMultipleRestaurantsRequirement;
pub use minimum_age::MinimumAgeRequirement;
pub use nationality::{ALLOWED_NATIONALITIES, NationalityRequirement};
pub use resource_operation::{ResourceOperation, ResourceOperationRequirement};

/// Named policies attached to endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Nationality claim is German or Polish.
    HasNationality,
    /// Caller is at least 20 years old.
    AtLeast20,
    /// Caller created at least two restaurants.
    CreatedAtLeast2Restaurants,
}

impl Policy {
    pub fn name(self) -> &'static str {
        match self {
            Policy::HasNationality => "HasNationality",
            Policy::AtLeast20 => "AtLeast20",
            Policy::CreatedAtLeast2Restaurants => "CreatedAtLeast2Restaurants",
        }
    }
}
