//! HTTP request handlers.
//!
//! Handlers extract request data, check policies the route requires, call
//! application services and map results to responses. Errors propagate as
//! [`AppError`](crate::error::AppError).

pub mod account;
pub mod dishes;
pub mod health;
pub mod restaurants;

pub use account::{login_handler, register_handler};
pub use dishes::{
    create_dish_handler, delete_all_dishes_handler, delete_dish_handler, get_dish_handler,
    list_dishes_handler,
};
pub use health::health_handler;
pub use restaurants::{
    create_restaurant_handler, delete_restaurant_handler, get_restaurant_handler,
    list_restaurants_handler, update_restaurant_handler,
};
