//! # System Module
//!
//! Liveness probe endpoint.

pub mod handlers;
pub mod routes;

pub use routes::system_routes;
