//! Bootstrap seeding of the lesson catalog
//!
//! Inserts the fixed initial lessons once, guarded by an emptiness check.
//! Re-running on every startup is a no-op as long as any lessons exist.

use sqlx::SqlitePool;
use tracing::info;

use crate::common::generate_lesson_id;

/// One seed catalog entry
struct SeedLesson {
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    video_url: &'static str,
    available: bool,
    sort_order: i64,
}

const INITIAL_LESSONS: &[SeedLesson] = &[
    SeedLesson {
        title: "Введение в курс",
        description: "Основные понятия компьютерной графики",
        duration: "15:30",
        video_url: "https://example.com/video1.mp4",
        available: true,
        sort_order: 1,
    },
    SeedLesson {
        title: "Основы CG",
        description: "Базовые принципы работы с графикой",
        duration: "22:15",
        video_url: "https://example.com/video2.mp4",
        available: true,
        sort_order: 2,
    },
    SeedLesson {
        title: "Продвинутые техники",
        description: "Сложные методы создания графики",
        duration: "30:45",
        video_url: "https://example.com/video3.mp4",
        available: false,
        sort_order: 3,
    },
    SeedLesson {
        title: "Практические задания",
        description: "Реальные проекты для практики",
        duration: "28:20",
        video_url: "https://example.com/video4.mp4",
        available: false,
        sort_order: 4,
    },
];

/// Insert the initial lesson catalog if the collection is empty
pub async fn seed_lessons(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lessons")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        info!(existing = count, "Lesson catalog already seeded, skipping");
        return Ok(());
    }

    for lesson in INITIAL_LESSONS {
        sqlx::query(
            r#"
            INSERT INTO lessons (id, title, description, duration, video_url, available, sort_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, datetime('now'))
            "#,
        )
        .bind(generate_lesson_id())
        .bind(lesson.title)
        .bind(lesson.description)
        .bind(lesson.duration)
        .bind(lesson.video_url)
        .bind(lesson.available)
        .bind(lesson.sort_order)
        .execute(pool)
        .await?;
    }

    info!(count = INITIAL_LESSONS.len(), "✅ Initial lessons created");

    Ok(())
}
