//! System routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the system router
///
/// # Routes
/// - `GET /api/health` - Liveness probe
pub fn system_routes() -> Router {
    Router::new().route("/api/health", get(handlers::health_check))
}
