//! Restaurant aggregate: the restaurant row, its address and its dishes.

use super::dish::Dish;

/// A restaurant with its optional address and its dishes.
///
/// `created_by_id` is the owner used by resource authorization. It is `None`
/// for seeded rows and for restaurants whose creator was removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub created_by_id: Option<i64>,
    pub address: Option<Address>,
    pub dishes: Vec<Dish>,
}

impl Restaurant {
    /// Returns true when `user_id` created this restaurant.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.created_by_id == Some(user_id)
    }
}

/// Postal address of a restaurant (at most one per restaurant).
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i64,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
}

/// Input data for creating a restaurant together with its address.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub created_by_id: Option<i64>,
    pub address: NewAddress,
}

#[derive(Debug, Clone)]
pub struct NewAddress {
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
}

/// Full replacement of the editable restaurant fields.
///
/// `description: None` clears the stored description.
#[derive(Debug, Clone)]
pub struct UpdateRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub has_delivery: bool,
}
