//! Business logic services for the application layer.

pub mod account_service;
pub mod auth_service;
pub mod authorization_service;
pub mod dish_service;
pub mod restaurant_service;

pub use account_service::{AccountService, Registration};
pub use auth_service::{AuthService, JwtSettings};
pub use authorization_service::AuthorizationService;
pub use dish_service::{DishInput, DishService};
pub use restaurant_service::{RestaurantQuery, RestaurantService};
