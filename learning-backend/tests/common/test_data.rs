// tests/common/test_data.rs

use chrono::{DateTime, Duration, Utc};
use learning_backend::domain::learning_record::{
    Course, Enrollment, ModuleCompletionEvent, ProgressRecord, QuizQuestionDefinition,
    QuizResult, VocabularyItem,
};
use learning_backend::domain::question_category::{ProficiencyCategory, QuestionCategory};
use uuid::Uuid;

/// テストで固定する「現在時刻」
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-29T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// レベル・語数・語彙数を指定したコース (問題は q1=detail, q2=main-idea, q3=vocabulary)
pub fn create_test_course(level: &str, word_count: u64, vocabulary_items: usize) -> Course {
    Course {
        id: Uuid::new_v4(),
        difficulty_level: level.to_string(),
        word_count,
        vocabulary_items: (0..vocabulary_items)
            .map(|i| VocabularyItem {
                word: format!("word-{}", i),
                category: ProficiencyCategory::Essential,
            })
            .collect(),
        quiz_questions: vec![
            question("q1", QuestionCategory::Detail),
            question("q2", QuestionCategory::MainIdea),
            question("q3", QuestionCategory::Vocabulary),
        ],
    }
}

pub fn question(id: &str, category: QuestionCategory) -> QuizQuestionDefinition {
    QuizQuestionDefinition {
        question_id: id.to_string(),
        category,
    }
}

pub fn create_test_enrollment(user_id: Uuid, course: &Course, enrolled_days_ago: i64) -> Enrollment {
    Enrollment {
        user_id,
        course_id: course.id,
        enrolled_at: days_ago(enrolled_days_ago),
    }
}

pub fn create_test_progress(course: &Course, completed_modules: &[i64]) -> ProgressRecord {
    ProgressRecord {
        completed_modules: completed_modules.iter().copied().collect(),
        ..ProgressRecord::empty(course.id)
    }
}

pub fn quiz_result(question_id: &str, is_correct: bool) -> QuizResult {
    QuizResult {
        question_id: question_id.to_string(),
        is_correct,
    }
}

pub fn module_completed(module_number: i64, completed_at: DateTime<Utc>) -> ModuleCompletionEvent {
    ModuleCompletionEvent {
        module_number,
        completed_at,
    }
}
