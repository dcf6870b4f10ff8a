//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs carry `validator` rules; response DTOs are built from domain
//! entities through `From` conversions. JSON field names are camelCase.

pub mod account;
pub mod dish;
pub mod health;
pub mod pagination;
pub mod restaurant;
