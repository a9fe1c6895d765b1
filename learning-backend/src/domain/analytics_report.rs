// src/domain/analytics_report.rs
//
// ダッシュボード用の集計結果。毎回生成して返すだけで保存はしない。

use serde::{Deserialize, Serialize};

use super::question_category::QuestionCategory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_words_learned: u64,
    pub courses_completed: u64,
    pub courses_in_progress: u64,
    pub total_vocabulary_clicked: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAccuracy {
    pub correct: u64,
    pub total: u64,
}

impl CategoryAccuracy {
    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }
}

/// 3 分類すべてのキーが常に存在する
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAccuracyByCategory {
    #[serde(rename = "main-idea")]
    pub main_idea: CategoryAccuracy,
    pub detail: CategoryAccuracy,
    pub vocabulary: CategoryAccuracy,
}

impl QuizAccuracyByCategory {
    pub fn get_mut(&mut self, category: QuestionCategory) -> &mut CategoryAccuracy {
        match category {
            QuestionCategory::MainIdea => &mut self.main_idea,
            QuestionCategory::Detail => &mut self.detail,
            QuestionCategory::Vocabulary => &mut self.vocabulary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyLevelStats {
    pub level: String,
    pub clicked: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// YYYY-MM-DD (集計側のローカル暦)
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    /// 週の開始日 M/D
    pub week_label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: AnalyticsSummary,
    pub quiz_accuracy_by_type: QuizAccuracyByCategory,
    pub vocabulary_by_level: Vec<VocabularyLevelStats>,
    pub activity_data: Vec<DailyActivity>,
    pub weekly_activity: Vec<WeeklyActivity>,
}
