//! Nationality claim requirement.

use crate::domain::entities::Principal;

/// Nationalities accepted by the `HasNationality` policy.
pub const ALLOWED_NATIONALITIES: &[&str] = &["German", "Polish"];

/// Passes when the nationality claim is one of `allowed`. Matching is exact.
#[derive(Debug, Clone, Copy)]
pub struct NationalityRequirement {
    allowed: &'static [&'static str],
}

impl NationalityRequirement {
    pub fn new(allowed: &'static [&'static str]) -> Self {
        Self { allowed }
    }

    pub fn is_satisfied(&self, principal: &Principal) -> bool {
        principal
            .nationality
            .as_deref()
            .is_some_and(|n| self.allowed.contains(&n))
    }
}
