// src/domain/course_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::learning_record::{Course, QuizQuestionDefinition, VocabularyItem};
use super::question_category::{ProficiencyCategory, QuestionCategory};
use super::stored_json::parse_array;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(nullable)]
    pub difficulty_level: Option<String>,
    #[sea_orm(nullable)]
    pub word_count: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub vocabulary_items: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub quiz_questions: Json,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `vocabulary_items` の要素。古いデータは単語文字列だけのことがある
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredVocabularyItem {
    Word(String),
    Item {
        #[serde(default)]
        word: Option<String>,
        #[serde(default, alias = "proficiencyCategory")]
        category: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredQuizQuestion {
    #[serde(default, alias = "id")]
    question_id: Option<String>,
    #[serde(default, alias = "type")]
    category: Option<String>,
}

impl From<StoredVocabularyItem> for VocabularyItem {
    fn from(stored: StoredVocabularyItem) -> Self {
        match stored {
            StoredVocabularyItem::Word(word) => VocabularyItem {
                word,
                category: ProficiencyCategory::Unclassified,
            },
            StoredVocabularyItem::Item { word, category } => VocabularyItem {
                word: word.unwrap_or_default(),
                category: ProficiencyCategory::from(category.as_deref()),
            },
        }
    }
}

impl StoredQuizQuestion {
    fn into_definition(self) -> Option<QuizQuestionDefinition> {
        let question_id = self.question_id?;
        let category = self.category?.parse::<QuestionCategory>().ok()?;
        Some(QuizQuestionDefinition {
            question_id,
            category,
        })
    }
}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        let vocabulary_items = parse_array::<StoredVocabularyItem>(&model.vocabulary_items)
            .into_iter()
            .map(VocabularyItem::from)
            .collect();

        let quiz_questions = parse_array::<StoredQuizQuestion>(&model.quiz_questions)
            .into_iter()
            .filter_map(StoredQuizQuestion::into_definition)
            .collect();

        Course {
            id: model.id,
            difficulty_level: model.difficulty_level.unwrap_or_default(),
            word_count: model
                .word_count
                .and_then(|count| u64::try_from(count).ok())
                .unwrap_or(0),
            vocabulary_items,
            quiz_questions,
        }
    }
}
