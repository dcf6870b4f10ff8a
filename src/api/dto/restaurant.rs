//! DTOs for restaurant endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::dish::DishDto;
use crate::domain::entities::{NewAddress, NewRestaurant, Restaurant, UpdateRestaurant};

/// Restaurant as returned to clients, with its address flattened.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub dishes: Vec<DishDto>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(restaurant: Restaurant) -> Self {
        let (city, street, postal_code) = match restaurant.address {
            Some(a) => (Some(a.city), Some(a.street), a.postal_code),
            None => (None, None, None),
        };

        Self {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            category: restaurant.category,
            has_delivery: restaurant.has_delivery,
            city,
            street,
            postal_code,
            dishes: restaurant.dishes.into_iter().map(DishDto::from).collect(),
        }
    }
}

/// Request body for `POST /api/restaurant`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 25, message = "Name must be 1 to 25 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub category: Option<String>,

    #[serde(default)]
    pub has_delivery: bool,

    #[validate(email(message = "Contact email is not a valid email address"))]
    pub contact_email: Option<String>,

    pub contact_number: Option<String>,

    #[validate(length(min = 1, max = 50, message = "City must be 1 to 50 characters"))]
    pub city: String,

    #[validate(length(min = 1, max = 50, message = "Street must be 1 to 50 characters"))]
    pub street: String,

    pub postal_code: Option<String>,
}

impl From<CreateRestaurantRequest> for NewRestaurant {
    fn from(req: CreateRestaurantRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            has_delivery: req.has_delivery,
            contact_email: req.contact_email,
            contact_number: req.contact_number,
            created_by_id: None,
            address: NewAddress {
                city: req.city,
                street: req.street,
                postal_code: req.postal_code,
            },
        }
    }
}

/// Request body for `PUT /api/restaurant/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    #[validate(length(min = 1, max = 25, message = "Name must be 1 to 25 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub has_delivery: bool,
}

impl From<UpdateRestaurantRequest> for UpdateRestaurant {
    fn from(req: UpdateRestaurantRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            has_delivery: req.has_delivery,
        }
    }
}
