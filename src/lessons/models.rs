//! Lesson data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lesson database model
///
/// Serialized camelCase on the wire; `sort_order` is exposed as `order`
/// (`order` is reserved in SQL, so the column is named differently).
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub available: bool,
    #[serde(rename = "order")]
    pub sort_order: i64,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}
