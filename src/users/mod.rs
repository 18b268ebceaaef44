//! # Users Module
//!
//! This module handles user accounts:
//! - Registration with duplicate-email rejection
//! - Salted password hashing (never stored in clear)
//! - User lookup with a safe projection (no credentials on the wire)

pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::User;
pub use routes::users_routes;
