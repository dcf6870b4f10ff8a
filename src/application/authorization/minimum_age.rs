//! Minimum age requirement evaluated against the date of birth claim.

use chrono::{Months, NaiveDate};

use crate::domain::entities::Principal;

/// Passes when the caller is at least `minimum_age` years old on `today`.
#[derive(Debug, Clone, Copy)]
pub struct MinimumAgeRequirement {
    minimum_age: u32,
}

impl MinimumAgeRequirement {
    pub fn new(minimum_age: u32) -> Self {
        Self { minimum_age }
    }

    /// Callers without a date of birth never satisfy the requirement.
    /// A 29 February birthday rolls over to 28 February in non-leap years.
    pub fn is_satisfied(&self, principal: &Principal, today: NaiveDate) -> bool {
        let Some(date_of_birth) = principal.date_of_birth else {
            tracing::info!(user = %principal.name, "No date of birth claim");
            return false;
        };

        tracing::info!(
            user = %principal.name,
            date_of_birth = %date_of_birth,
            "Evaluating minimum age requirement"
        );

        date_of_birth
            .checked_add_months(Months::new(self.minimum_age * 12))
            .is_some_and(|birthday| birthday <= today)
    }
}
