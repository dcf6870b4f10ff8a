//! Helper functions used across the application.
//!
//! - [`password`] - bcrypt hashing on the blocking thread pool

pub mod password;
