//! Restaurant CRUD service.

use serde_json::json;
use std::sync::Arc;

use crate::application::authorization::ResourceOperation;
use crate::application::paging::PagedResult;
use crate::application::services::AuthorizationService;
use crate::domain::entities::{NewRestaurant, Principal, Restaurant, UpdateRestaurant};
use crate::domain::repositories::{
    RestaurantFilter, RestaurantRepository, SortColumn, SortDirection,
};
use crate::error::AppError;

/// Already validated listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantQuery {
    pub search_phrase: Option<String>,
    pub page_number: i64,
    pub page_size: i64,
    pub sort_by: Option<SortColumn>,
    pub sort_direction: SortDirection,
}

/// Service for creating, listing, updating and removing restaurants.
///
/// Mutations are checked against the caller through [`AuthorizationService`].
pub struct RestaurantService<R: RestaurantRepository + ?Sized> {
    restaurant_repository: Arc<R>,
    authorization_service: Arc<AuthorizationService<R>>,
}

impl<R: RestaurantRepository + ?Sized> RestaurantService<R> {
    /// Creates a new restaurant service.
    pub fn new(
        restaurant_repository: Arc<R>,
        authorization_service: Arc<AuthorizationService<R>>,
    ) -> Self {
        Self {
            restaurant_repository,
            authorization_service,
        }
    }

    /// Creates a restaurant owned by the caller and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        principal: &Principal,
        mut new_restaurant: NewRestaurant,
    ) -> Result<i64, AppError> {
        new_restaurant.created_by_id = Some(principal.user_id);

        let id = self.restaurant_repository.create(new_restaurant).await?;
        tracing::info!(restaurant_id = id, user_id = principal.user_id, "Restaurant created");

        Ok(id)
    }

    /// Returns one page of restaurants matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all(&self, query: RestaurantQuery) -> Result<PagedResult<Restaurant>, AppError> {
        let offset = query.page_size * (query.page_number - 1);
        let filter = RestaurantFilter::new(offset, query.page_size)
            .with_search(query.search_phrase)
            .with_sort(query.sort_by, query.sort_direction);

        let (restaurants, total_count) = tokio::try_join!(
            self.restaurant_repository.search(filter.clone()),
            self.restaurant_repository.count(filter)
        )?;

        Ok(PagedResult::new(
            restaurants,
            total_count,
            query.page_size,
            query.page_number,
        ))
    }

    /// Counts every stored restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_all(&self) -> Result<i64, AppError> {
        self.restaurant_repository
            .count(RestaurantFilter::new(0, 1))
            .await
    }

    /// Retrieves a restaurant with its address and dishes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no restaurant has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Restaurant, AppError> {
        self.restaurant_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| restaurant_not_found(id))
    }

    /// Replaces the editable fields of a restaurant owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Forbidden`] if the caller is not its creator.
    pub async fn update(
        &self,
        principal: &Principal,
        id: i64,
        update: UpdateRestaurant,
    ) -> Result<(), AppError> {
        let restaurant = self.get_by_id(id).await?;
        self.authorization_service
            .authorize_resource(principal, &restaurant, ResourceOperation::Update)?;

        self.restaurant_repository.update(id, update).await
    }

    /// Deletes a restaurant owned by the caller, with its address and dishes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Forbidden`] if the caller is not its creator.
    pub async fn delete(&self, principal: &Principal, id: i64) -> Result<(), AppError> {
        tracing::warn!(
            restaurant_id = id,
            user = %principal.name,
            "Restaurant with id: {} DELETE action invoked",
            id
        );

        let restaurant = self.get_by_id(id).await?;
        self.authorization_service
            .authorize_resource(principal, &restaurant, ResourceOperation::Delete)?;

        self.restaurant_repository.delete(id).await
    }
}

fn restaurant_not_found(id: i64) -> AppError {
    AppError::not_found("Restaurant not found", json!({ "id": id }))
}
