//! Per-restaurant operation requirement.

use crate::domain::entities::{Principal, Restaurant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOperation {
    Create,
    Read,
    Update,
    Delete,
}

/// Read and Create are open to any authenticated caller; Update and Delete
/// require the caller to be the restaurant's creator.
#[derive(Debug, Clone, Copy)]
pub struct ResourceOperationRequirement {
    operation: ResourceOperation,
}

impl ResourceOperationRequirement {
    pub fn new(operation: ResourceOperation) -> Self {
        Self { operation }
    }

    pub fn is_satisfied(&self, principal: &Principal, restaurant: &Restaurant) -> bool {
        match self.operation {
            ResourceOperation::Create | ResourceOperation::Read => true,
            ResourceOperation::Update | ResourceOperation::Delete => {
                restaurant.is_owned_by(principal.user_id)
            }
        }
    }
}
