//! DTOs for dish endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::DishInput;
use crate::domain::entities::Dish;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<Dish> for DishDto {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            description: dish.description,
            price: dish.price,
        }
    }
}

/// Request body for `POST /api/restaurant/{id}/dish`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

impl From<CreateDishRequest> for DishInput {
    fn from(req: CreateDishRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}
