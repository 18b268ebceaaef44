//! # Lessons Module
//!
//! This module handles the lesson catalog:
//! - Listing lessons ordered by display position
//! - Bootstrap seeding of the initial catalog

pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;

#[cfg(test)]
mod tests;

pub use routes::lessons_routes;
