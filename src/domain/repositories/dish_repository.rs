//! Repository trait for dishes.

use crate::domain::entities::{Dish, NewDish};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for dishes belonging to restaurants.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDishRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Inserts a dish and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the restaurant does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_dish: NewDish) -> Result<i64, AppError>;

    /// Finds a dish by id regardless of its restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Dish>, AppError>;

    /// Lists the dishes of a restaurant ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Dish>, AppError>;

    /// Deletes a single dish.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the dish does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Deletes every dish of a restaurant and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_restaurant(&self, restaurant_id: i64) -> Result<u64, AppError>;
}
