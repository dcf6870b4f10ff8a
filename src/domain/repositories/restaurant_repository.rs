//! Repository trait for restaurants and the paged search filter.

use crate::domain::entities::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::error::AppError;
use async_trait::async_trait;
use std::str::FromStr;

/// Column a restaurant listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Description,
    Category,
}

impl SortColumn {
    /// Accepted `sortBy` values, matched exactly.
    pub const ALLOWED: [&'static str; 3] = ["Name", "Description", "Category"];

    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Name => "r.name",
            SortColumn::Description => "r.description",
            SortColumn::Category => "r.category",
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(SortColumn::Name),
            "Description" => Ok(SortColumn::Description),
            "Category" => Ok(SortColumn::Category),
            other => Err(format!(
                "Sort by is optional, or must be in [{}], got '{other}'",
                Self::ALLOWED.join(",")
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Filter criteria for listing restaurants.
///
/// Supports a case-insensitive search phrase over name and description,
/// optional ordering and offset pagination. Ties are always broken by id.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFilter {
    pub search_phrase: Option<String>,
    pub sort_by: Option<SortColumn>,
    pub sort_direction: SortDirection,
    pub offset: i64,
    pub limit: i64,
}

impl RestaurantFilter {
    /// Creates a new filter with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            search_phrase: None,
            sort_by: None,
            sort_direction: SortDirection::Asc,
            offset,
            limit,
        }
    }

    /// Adds search filtering. The phrase is matched as sent; an empty
    /// phrase matches everything.
    pub fn with_search(mut self, phrase: Option<String>) -> Self {
        self.search_phrase = phrase.filter(|p| !p.is_empty());
        self
    }

    /// Adds ordering to the query.
    pub fn with_sort(mut self, sort_by: Option<SortColumn>, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_direction = direction;
        self
    }
}

/// Repository interface for restaurants.
///
/// Restaurants are always loaded together with their address and dishes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_restaurant.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Creates a restaurant and its address atomically.
    ///
    /// Returns the id of the new restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<i64, AppError>;

    /// Finds a restaurant (with address and dishes) by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;

    /// Returns one page of restaurants matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, AppError>;

    /// Counts all restaurants matching the filter's search phrase,
    /// ignoring pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, filter: RestaurantFilter) -> Result<i64, AppError>;

    /// Replaces the editable fields of a restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateRestaurant) -> Result<(), AppError>;

    /// Deletes a restaurant together with its address and dishes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts restaurants created by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_creator(&self, user_id: i64) -> Result<i64, AppError>;
}
