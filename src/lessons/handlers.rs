//! Lesson handlers

use axum::extract::Extension;
use axum::Json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::Lesson;
use crate::common::{ApiError, AppState};

/// GET /api/lessons
/// Returns all lessons ordered ascending by display position
pub async fn get_lessons(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let state = state_lock.read().await.clone();

    let lessons = sqlx::query_as::<_, Lesson>(
        r#"
        SELECT id, title, description, duration, video_url, available, sort_order, created_at
        FROM lessons
        ORDER BY sort_order ASC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(count = lessons.len(), "Fetched lesson catalog");

    Ok(Json(lessons))
}
