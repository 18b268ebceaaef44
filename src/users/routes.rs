//! User routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the users router
///
/// # Routes
/// - `POST /api/register` - Register a new user
/// - `GET /api/user/:id` - Fetch a user projection
pub fn users_routes() -> Router {
    Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/user/:id", get(handlers::get_user))
}
