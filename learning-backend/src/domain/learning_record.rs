// src/domain/learning_record.rs
//
// 集計が読むレコード。保存形式からの変換 (既定値の補完) は各 *_model.rs で済ませ、
// ここに来る時点で Option や壊れた要素は残っていない。

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::question_category::{ProficiencyCategory, QuestionCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
    pub word: String,
    pub category: ProficiencyCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestionDefinition {
    pub question_id: String,
    pub category: QuestionCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    /// CEFR 表記。未設定は空文字 (並び順は最後)
    pub difficulty_level: String,
    pub word_count: u64,
    pub vocabulary_items: Vec<VocabularyItem>,
    pub quiz_questions: Vec<QuizQuestionDefinition>,
}

impl Course {
    /// 問題 ID から分類を引く。定義がなければ None
    pub fn question_category(&self, question_id: &str) -> Option<QuestionCategory> {
        self.quiz_questions
            .iter()
            .find(|definition| definition.question_id == question_id)
            .map(|definition| definition.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub question_id: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCompletionEvent {
    pub module_number: i64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub course_id: Uuid,
    pub completed_modules: BTreeSet<i64>,
    pub quiz_results: Vec<QuizResult>,
    /// 書き込み側で重複排除される前提。読み取り側では重複もそのまま数える
    pub vocabulary_clicks: Vec<String>,
    pub module_completions: Vec<ModuleCompletionEvent>,
}

impl ProgressRecord {
    pub fn empty(course_id: Uuid) -> Self {
        Self {
            course_id,
            completed_modules: BTreeSet::new(),
            quiz_results: Vec::new(),
            vocabulary_clicks: Vec::new(),
            module_completions: Vec::new(),
        }
    }
}
