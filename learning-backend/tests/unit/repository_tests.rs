// tests/unit/repository_tests.rs
//
// Docker が必要なので既定では実行しない: cargo test -- --ignored

use crate::common::{db::TestDatabase, init_test_env};
use chrono::{Duration, Utc};
use learning_backend::domain::question_category::{ProficiencyCategory, QuestionCategory};
use learning_backend::domain::{course_model, course_progress_model, enrollment_model};
use learning_backend::repository::analytics_data_source::{
    AnalyticsDataSource, DatabaseAnalyticsDataSource,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::json;
use uuid::Uuid;

async fn insert_course(
    db: &DatabaseConnection,
    difficulty_level: Option<&str>,
    word_count: Option<i32>,
) -> Uuid {
    let id = Uuid::new_v4();
    course_model::ActiveModel {
        id: Set(id),
        title: Set("Reading practice".to_string()),
        difficulty_level: Set(difficulty_level.map(str::to_string)),
        word_count: Set(word_count),
        vocabulary_items: Set(json!([
            { "word": "run", "category": "essential" },
            "jump",
        ])),
        quiz_questions: Set(json!([
            { "questionId": "q1", "category": "detail" },
            { "id": "q2", "type": "main-idea" },
            { "questionId": "q3", "category": "trivia" },
        ])),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

async fn insert_enrollment(db: &DatabaseConnection, user_id: Uuid, course_id: Uuid, days_ago: i64) {
    enrollment_model::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        course_id: Set(course_id),
        enrolled_at: Set(Utc::now() - Duration::days(days_ago)),
    }
    .insert(db)
    .await
    .unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_enrollments_are_listed_per_user_oldest_first() {
    init_test_env();
    let db = TestDatabase::new().await;
    let source = DatabaseAnalyticsDataSource::new(db.connection.clone());

    let user_id = Uuid::new_v4();
    let first = insert_course(&db.connection, Some("A1"), Some(100)).await;
    let second = insert_course(&db.connection, Some("B1"), Some(200)).await;
    insert_enrollment(&db.connection, user_id, second, 1).await;
    insert_enrollment(&db.connection, user_id, first, 10).await;
    insert_enrollment(&db.connection, Uuid::new_v4(), first, 5).await;

    let enrollments = source.list_enrollments(user_id).await.unwrap();
    let course_ids: Vec<Uuid> = enrollments.iter().map(|e| e.course_id).collect();
    assert_eq!(course_ids, vec![first, second]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_course_defaults_are_resolved() {
    init_test_env();
    let db = TestDatabase::new().await;
    let source = DatabaseAnalyticsDataSource::new(db.connection.clone());

    let course_id = insert_course(&db.connection, None, None).await;
    let course = source.get_course(course_id).await.unwrap().unwrap();

    assert_eq!(course.difficulty_level, "");
    assert_eq!(course.word_count, 0);
    assert_eq!(course.vocabulary_items.len(), 2);
    assert_eq!(
        course.vocabulary_items[1].category,
        ProficiencyCategory::Unclassified
    );
    // 未知カテゴリの問題定義は落とす
    assert_eq!(course.quiz_questions.len(), 2);
    assert_eq!(course.question_category("q2"), Some(QuestionCategory::MainIdea));

    assert!(source.get_course(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_progress_is_normalized_and_first_row_wins() {
    init_test_env();
    let db = TestDatabase::new().await;
    let source = DatabaseAnalyticsDataSource::new(db.connection.clone());
    let course_id = insert_course(&db.connection, Some("B2"), Some(300)).await;

    let created = Utc::now() - Duration::days(3);
    course_progress_model::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        completed_modules: Set(json!([1, 2, 2, 9, 0])),
        quiz_results: Set(json!([
            { "questionId": "q1", "isCorrect": true },
            { "isCorrect": true },
        ])),
        vocabulary_clicks: Set(json!(["run", "run"])),
        module_completions: Set(json!([
            { "moduleNumber": 1, "completedAt": "2025-03-01T10:00:00Z" },
            { "moduleNumber": 2, "completedAt": null },
        ])),
        created_at: Set(created),
        updated_at: Set(created),
    }
    .insert(&db.connection)
    .await
    .unwrap();

    course_progress_model::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        completed_modules: Set(json!([1, 2, 3, 4, 5, 6])),
        quiz_results: Set(json!([])),
        vocabulary_clicks: Set(json!([])),
        module_completions: Set(json!([])),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(&db.connection)
    .await
    .unwrap();

    let progress = source.get_progress(course_id).await.unwrap().unwrap();
    assert_eq!(progress.completed_modules.len(), 2);
    assert_eq!(progress.quiz_results.len(), 1);
    assert_eq!(progress.vocabulary_clicks.len(), 2);
    assert_eq!(progress.module_completions.len(), 1);

    assert!(source.get_progress(Uuid::new_v4()).await.unwrap().is_none());
}
