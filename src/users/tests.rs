//! Tests for users module
//!
//! These tests verify user account functionality including:
//! - Registration validation
//! - Duplicate-email rejection
//! - Safe projection of fetched users

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::{migrations, AppState, Validator};
    use crate::services::{TelegramService, YookassaService};
    use axum::extract::{Extension, Json, Path};
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    async fn test_state() -> Arc<RwLock<AppState>> {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let http = reqwest::Client::new();
        let state = AppState {
            db: pool,
            frontend_url: "https://academycg.online".to_string(),
            yookassa_service: Arc::new(YookassaService::new(http.clone(), None, None)),
            telegram_service: Arc::new(TelegramService::new(http, None)),
        };
        Arc::new(RwLock::new(state))
    }

    fn register_request(email: &str) -> models::RegisterRequest {
        models::RegisterRequest {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_register_validation_rejects_empty_name() {
        let request = models::RegisterRequest {
            name: "  ".to_string(),
            email: "user@example.com".to_string(),
            password: "secret123".to_string(),
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_register_validation_rejects_short_password() {
        let request = models::RegisterRequest {
            name: "Test".to_string(),
            email: "user@example.com".to_string(),
            password: "123".to_string(),
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_register_validation_rejects_bad_email() {
        let request = models::RegisterRequest {
            name: "Test".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_subscription_default_projection() {
        let user = models::User {
            id: "U_TEST123456".to_string(),
            name: "Test".to_string(),
            email: "user@example.com".to_string(),
            password_hash: "sha256$AAAA$BBBB".to_string(),
            telegram_id: None,
            subscription_active: false,
            subscription_plan: None,
            subscription_start: None,
            subscription_end: None,
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
        };

        let subscription = user.subscription();
        assert!(!subscription.active);
        assert!(subscription.plan.is_none());

        let json = serde_json::to_value(&subscription).expect("Failed to serialize");
        assert_eq!(json["active"], false);
        assert!(json["startDate"].is_null());
        assert!(json["endDate"].is_null());
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let state = test_state().await;

        handlers::register(Extension(state.clone()), Json(register_request("dup@example.com")))
            .await
            .expect("First registration should succeed");

        let second = handlers::register(
            Extension(state.clone()),
            Json(register_request("dup@example.com")),
        )
        .await;
        assert!(second.is_err(), "Second registration must be rejected");

        let db = state.read().await.db.clone();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("dup@example.com")
            .fetch_one(&db)
            .await
            .expect("Count query failed");
        assert_eq!(count, 1, "Exactly one user record must exist");
    }

    #[tokio::test]
    async fn test_fetch_after_register_returns_inactive_subscription() {
        let state = test_state().await;

        let Json(created) = handlers::register(
            Extension(state.clone()),
            Json(register_request("new@example.com")),
        )
        .await
        .expect("Registration should succeed");

        let id = created["user"]["id"].as_str().expect("id missing").to_string();

        let Json(fetched) = handlers::get_user(Extension(state.clone()), Path(id))
            .await
            .expect("Lookup should succeed");

        assert_eq!(fetched["name"], "Test User");
        assert_eq!(fetched["email"], "new@example.com");
        assert_eq!(fetched["subscription"]["active"], false);
        assert!(fetched.get("password").is_none());
        assert!(fetched.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_is_not_found() {
        let state = test_state().await;

        let result =
            handlers::get_user(Extension(state), Path("U_MISSING000".to_string())).await;
        assert!(result.is_err(), "Unknown id must yield an error");
    }

    #[tokio::test]
    async fn test_password_stored_hashed() {
        let state = test_state().await;

        handlers::register(
            Extension(state.clone()),
            Json(register_request("hash@example.com")),
        )
        .await
        .expect("Registration should succeed");

        let db = state.read().await.db.clone();
        let (stored,): (String,) =
            sqlx::query_as("SELECT password_hash FROM users WHERE email = ?")
                .bind("hash@example.com")
                .fetch_one(&db)
                .await
                .expect("Fetch failed");

        assert_ne!(stored, "secret123");
        assert!(password::verify_password("secret123", &stored));
    }
}
