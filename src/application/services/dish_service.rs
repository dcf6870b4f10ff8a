//! Dish management for a single restaurant.

use serde_json::json;
use std::sync::Arc;

use crate::application::authorization::ResourceOperation;
use crate::application::services::AuthorizationService;
use crate::domain::entities::{Dish, NewDish, Principal, Restaurant};
use crate::domain::repositories::{DishRepository, RestaurantRepository};
use crate::error::AppError;

/// Input for a new dish. The restaurant id comes from the route.
#[derive(Debug, Clone)]
pub struct DishInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Service for the dishes of a restaurant.
///
/// Every operation first resolves the restaurant and fails with
/// [`AppError::NotFound`] when it is missing. A dish id that exists but
/// belongs to another restaurant is reported as not found as well.
pub struct DishService<D, R>
where
    D: DishRepository + ?Sized,
    R: RestaurantRepository + ?Sized,
{
    dish_repository: Arc<D>,
    restaurant_repository: Arc<R>,
    authorization_service: Arc<AuthorizationService<R>>,
}

impl<D, R> DishService<D, R>
where
    D: DishRepository + ?Sized,
    R: RestaurantRepository + ?Sized,
{
    /// Creates a new dish service.
    pub fn new(
        dish_repository: Arc<D>,
        restaurant_repository: Arc<R>,
        authorization_service: Arc<AuthorizationService<R>>,
    ) -> Self {
        Self {
            dish_repository,
            restaurant_repository,
            authorization_service,
        }
    }

    /// Adds a dish to a restaurant owned by the caller and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Forbidden`] if the caller is not its creator.
    pub async fn create(
        &self,
        principal: &Principal,
        restaurant_id: i64,
        input: DishInput,
    ) -> Result<i64, AppError> {
        self.owned_restaurant(principal, restaurant_id).await?;

        self.dish_repository
            .create(NewDish {
                name: input.name,
                description: input.description,
                price: input.price,
                restaurant_id,
            })
            .await
    }

    /// Lists every dish of a restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    pub async fn get_all(&self, restaurant_id: i64) -> Result<Vec<Dish>, AppError> {
        self.restaurant(restaurant_id).await?;
        self.dish_repository.list_by_restaurant(restaurant_id).await
    }

    /// Retrieves one dish of a restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant or the dish does not
    /// exist, or if the dish belongs to another restaurant.
    pub async fn get_by_id(&self, restaurant_id: i64, dish_id: i64) -> Result<Dish, AppError> {
        self.restaurant(restaurant_id).await?;
        self.dish_of(restaurant_id, dish_id).await
    }

    /// Removes every dish of a restaurant owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Forbidden`] if the caller is not its creator.
    pub async fn remove_all(&self, principal: &Principal, restaurant_id: i64) -> Result<(), AppError> {
        self.owned_restaurant(principal, restaurant_id).await?;

        let removed = self
            .dish_repository
            .delete_by_restaurant(restaurant_id)
            .await?;
        tracing::info!(restaurant_id, removed, "Removed all dishes");

        Ok(())
    }

    /// Removes one dish of a restaurant owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant or the dish does not
    /// exist. Returns [`AppError::Forbidden`] if the caller is not the
    /// restaurant's creator.
    pub async fn remove_by_id(
        &self,
        principal: &Principal,
        restaurant_id: i64,
        dish_id: i64,
    ) -> Result<(), AppError> {
        self.owned_restaurant(principal, restaurant_id).await?;
        self.dish_of(restaurant_id, dish_id).await?;

        self.dish_repository.delete(dish_id).await
    }

    async fn restaurant(&self, restaurant_id: i64) -> Result<Restaurant, AppError> {
        self.restaurant_repository
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Restaurant not found", json!({ "id": restaurant_id }))
            })
    }

    async fn owned_restaurant(
        &self,
        principal: &Principal,
        restaurant_id: i64,
    ) -> Result<Restaurant, AppError> {
        let restaurant = self.restaurant(restaurant_id).await?;
        self.authorization_service.authorize_resource(
            principal,
            &restaurant,
            ResourceOperation::Update,
        )?;
        Ok(restaurant)
    }

    async fn dish_of(&self, restaurant_id: i64, dish_id: i64) -> Result<Dish, AppError> {
        self.dish_repository
            .find_by_id(dish_id)
            .await?
            .filter(|d| d.restaurant_id == restaurant_id)
            .ok_or_else(|| {
                AppError::not_found(
                    "Dish not found",
                    json!({ "restaurant_id": restaurant_id, "dish_id": dish_id }),
                )
            })
    }
}
