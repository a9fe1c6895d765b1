// src/domain/course_progress_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::completion_status::CompletionStatus;
use super::learning_record::{ModuleCompletionEvent, ProgressRecord, QuizResult};
use super::stored_json::{parse_array, parse_timestamp};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub completed_modules: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub quiz_results: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub vocabulary_clicks: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub module_completions: Json,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredQuizResult {
    #[serde(default)]
    question_id: Option<String>,
    #[serde(default)]
    is_correct: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredModuleCompletion {
    #[serde(default)]
    module_number: Option<i64>,
    #[serde(default)]
    completed_at: serde_json::Value,
}

impl From<Model> for ProgressRecord {
    fn from(model: Model) -> Self {
        let completed_modules: BTreeSet<i64> = parse_array::<i64>(&model.completed_modules)
            .into_iter()
            .filter(|module| CompletionStatus::is_valid_module(*module))
            .collect();

        let quiz_results = parse_array::<StoredQuizResult>(&model.quiz_results)
            .into_iter()
            .filter_map(|stored| {
                Some(QuizResult {
                    question_id: stored.question_id?,
                    is_correct: stored.is_correct.unwrap_or(false),
                })
            })
            .collect();

        // 完了時刻が読めないイベントはタイムスタンプを持たないので捨てる
        let module_completions = parse_array::<StoredModuleCompletion>(&model.module_completions)
            .into_iter()
            .filter_map(|stored| {
                Some(ModuleCompletionEvent {
                    module_number: stored.module_number.unwrap_or(0),
                    completed_at: parse_timestamp(&stored.completed_at)?,
                })
            })
            .collect();

        ProgressRecord {
            course_id: model.course_id,
            completed_modules,
            quiz_results,
            vocabulary_clicks: parse_array::<String>(&model.vocabulary_clicks),
            module_completions,
        }
    }
}
