//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs live in separate
//! `New*` structs and updates in `Update*` structs:
//!
//! - [`Restaurant`] with its [`Address`] and [`Dish`]es
//! - [`User`] with its [`Role`]
//! - [`Principal`] - the claim set of an authenticated caller

pub mod dish;
pub mod restaurant;
pub mod user;

pub use dish::{Dish, NewDish};
pub use restaurant::{Address, NewAddress, NewRestaurant, Restaurant, UpdateRestaurant};
pub use user::{NewUser, Principal, Role, User};
