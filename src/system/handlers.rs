//! System handlers

use axum::Json;
use chrono::Utc;

/// GET /api/health
/// Liveness probe
///
/// # Response
/// ```json
/// {
///   "status": "OK",
///   "message": "Backend is running!",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Backend is running!",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_shape() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Backend is running!");
        assert!(body["timestamp"].is_string());
    }
}
