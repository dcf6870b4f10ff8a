//! Dish entity.

/// A dish served by a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub restaurant_id: i64,
}

/// Input data for adding a dish to a restaurant.
#[derive(Debug, Clone)]
pub struct NewDish {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub restaurant_id: i64,
}
