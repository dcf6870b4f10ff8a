//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`RestaurantRepository`] - Restaurants with address and dishes, paged search
//! - [`DishRepository`] - Dishes of a restaurant
//! - [`UserRepository`] - User accounts and roles

pub mod dish_repository;
pub mod restaurant_repository;
pub mod user_repository;

pub use dish_repository::DishRepository;
pub use restaurant_repository::{RestaurantFilter, RestaurantRepository, SortColumn, SortDirection};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use dish_repository::MockDishRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
