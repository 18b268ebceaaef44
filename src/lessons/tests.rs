//! Tests for lessons module
//!
//! These tests verify lesson catalog functionality including:
//! - Lesson model serialization shape
//! - Seed idempotence against an in-memory database
//! - Catalog ordering

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::{generate_lesson_id, migrations};
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    #[test]
    fn test_lesson_serializes_camel_case() {
        let lesson = models::Lesson {
            id: "L_TEST123456".to_string(),
            title: "Введение в курс".to_string(),
            description: "Основные понятия компьютерной графики".to_string(),
            duration: "15:30".to_string(),
            video_url: "https://example.com/video1.mp4".to_string(),
            available: true,
            sort_order: 1,
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
        };

        let json = serde_json::to_value(&lesson).expect("Failed to serialize lesson");
        assert_eq!(json["videoUrl"], "https://example.com/video1.mp4");
        assert_eq!(json["order"], 1);
        assert_eq!(json["available"], true);
        assert!(json.get("video_url").is_none());
        assert!(json.get("sort_order").is_none());
    }

    #[tokio::test]
    async fn test_seed_creates_four_lessons() {
        let pool = test_pool().await;

        seed::seed_lessons(&pool).await.expect("Seed failed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lessons")
            .fetch_one(&pool)
            .await
            .expect("Count query failed");
        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = test_pool().await;

        // Simulates a process restart: seed runs once per startup
        seed::seed_lessons(&pool).await.expect("First seed failed");
        seed::seed_lessons(&pool).await.expect("Second seed failed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lessons")
            .fetch_one(&pool)
            .await
            .expect("Count query failed");
        assert_eq!(count, 4, "Re-seeding must not duplicate lessons");
    }

    #[tokio::test]
    async fn test_lessons_ordered_by_sort_order() {
        let pool = test_pool().await;

        // Insert out of order
        for sort_order in [3_i64, 1, 2] {
            sqlx::query(
                "INSERT INTO lessons (id, title, description, duration, video_url, available, sort_order) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(generate_lesson_id())
            .bind(format!("Lesson {}", sort_order))
            .bind("description")
            .bind("10:00")
            .bind("https://example.com/video.mp4")
            .bind(true)
            .bind(sort_order)
            .execute(&pool)
            .await
            .expect("Insert failed");
        }

        let lessons = sqlx::query_as::<_, models::Lesson>(
            "SELECT id, title, description, duration, video_url, available, sort_order, created_at \
             FROM lessons ORDER BY sort_order ASC",
        )
        .fetch_all(&pool)
        .await
        .expect("Fetch failed");

        let orders: Vec<i64> = lessons.iter().map(|l| l.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
