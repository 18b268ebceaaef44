//! User handlers

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::models::{RegisterRequest, User};
use super::password::hash_password;
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState, Validator};

/// POST /api/register
/// Registers a new user account
///
/// # Request Body
/// ```json
/// {
///   "name": "Ivan",
///   "email": "ivan@example.com",
///   "password": "secret123"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "user": { "id": "...", "name": "...", "email": "..." }
/// }
/// ```
pub async fn register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = payload.validate(&payload);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let email = payload.email.trim().to_lowercase();

    debug!(
        email = %safe_email_log(&email),
        "Registration request received"
    );

    // Idempotent rejection: a second registration with the same email is a
    // client error, never an upsert.
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if existing.is_some() {
        debug!(
            email = %safe_email_log(&email),
            "Registration rejected, email already in use"
        );
        return Err(ApiError::BadRequest("User already exists".to_string()));
    }

    let id = generate_user_id();
    let password_hash = hash_password(&payload.password);

    if let Err(e) = sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, created_at) \
         VALUES (?, ?, ?, ?, datetime('now'))",
    )
    .bind(&id)
    .bind(&payload.name)
    .bind(&email)
    .bind(&password_hash)
    .execute(&state.db)
    .await
    {
        // A concurrent registration can slip past the pre-check; the unique
        // index turns that race into the same client error.
        if is_unique_violation(&e) {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }
        error!(
            error = %e,
            email = %safe_email_log(&email),
            "Database error inserting new user"
        );
        return Err(ApiError::DatabaseError(e));
    }

    info!(
        user_id = %id,
        email = %safe_email_log(&email),
        "New user account created"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "user": {
            "id": id,
            "name": payload.name,
            "email": email,
        },
    })))
}

/// GET /api/user/:id
/// Returns a reduced user projection; the password hash never leaves the server
///
/// # Response
/// ```json
/// {
///   "id": "...",
///   "name": "...",
///   "email": "...",
///   "telegramId": null,
///   "subscription": { "active": false, "plan": null, "startDate": null, "endDate": null }
/// }
/// ```
pub async fn get_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&user_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "telegramId": user.telegram_id,
        "subscription": user.subscription(),
    })))
}

/// Detect a SQLite UNIQUE constraint violation
fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.message().contains("UNIQUE constraint failed"))
}
