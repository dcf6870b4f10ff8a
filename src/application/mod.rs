//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! authorization checks and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::RestaurantService`] - Restaurant CRUD and paged listing
//! - [`services::DishService`] - Dishes of a restaurant
//! - [`services::AccountService`] - Registration and login
//! - [`services::AuthService`] - JWT issuing and validation
//! - [`services::AuthorizationService`] - Policies, roles and resource ownership

pub mod authorization;
pub mod paging;
pub mod services;
