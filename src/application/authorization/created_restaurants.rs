//! Requirement on the number of restaurants a caller has created.

/// Passes when the caller created at least `minimum` restaurants.
#[derive(Debug, Clone, Copy)]
pub struct CreatedMultipleRestaurantsRequirement {
    minimum: i64,
}

impl CreatedMultipleRestaurantsRequirement {
    pub fn new(minimum: i64) -> Self {
        Self { minimum }
    }

    pub fn is_satisfied(&self, created_count: i64) -> bool {
        created_count >= self.minimum
    }
}
