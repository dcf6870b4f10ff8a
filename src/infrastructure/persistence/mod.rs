//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgRestaurantRepository`] - Restaurants, addresses and paged search
//! - [`PgDishRepository`] - Dishes
//! - [`PgUserRepository`] - User accounts

pub mod pg_dish_repository;
pub mod pg_restaurant_repository;
pub mod pg_user_repository;

pub use pg_dish_repository::PgDishRepository;
pub use pg_restaurant_repository::PgRestaurantRepository;
pub use pg_user_repository::PgUserRepository;
