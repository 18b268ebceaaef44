//! Payment routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the payments router
///
/// # Routes
/// - `POST /api/create-payment` - Start a payment, returns the redirect URL
/// - `POST /api/webhook/yookassa` - Gateway callback
pub fn payments_routes() -> Router {
    Router::new()
        .route("/api/create-payment", post(handlers::create_payment))
        .route("/api/webhook/yookassa", post(handlers::yookassa_webhook))
}
