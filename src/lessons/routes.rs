//! Lesson routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the lessons router
///
/// # Routes
/// - `GET /api/lessons` - List all lessons ordered by display position
pub fn lessons_routes() -> Router {
    Router::new().route("/api/lessons", get(handlers::get_lessons))
}
