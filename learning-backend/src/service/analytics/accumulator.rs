// src/service/analytics/accumulator.rs

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::activity::{daily_histogram, weekly_trend};
use crate::domain::analytics_report::{
    AnalyticsReport, AnalyticsSummary, QuizAccuracyByCategory, VocabularyLevelStats,
};
use crate::domain::cefr_level::cefr_rank;
use crate::domain::completion_status::CompletionStatus;
use crate::domain::learning_record::{Course, Enrollment, ProgressRecord};
use crate::types::ReportTimeZone;

#[derive(Debug, Default, Clone, Copy)]
struct LevelTotals {
    clicked: u64,
    total: u64,
}

/// コースごとの寄与を足し込むだけの集計器
///
/// 寄与は加算なので `add_course` の呼び出し順は結果に影響しない。
#[derive(Debug, Default)]
pub struct AnalyticsAccumulator {
    summary: AnalyticsSummary,
    quiz_accuracy: QuizAccuracyByCategory,
    levels: BTreeMap<String, LevelTotals>,
    activity: Vec<DateTime<Utc>>,
    skipped_quiz_results: u64,
}

impl AnalyticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 受講分の寄与を加える。進捗がなければ未着手として扱う
    pub fn add_course(
        &mut self,
        enrollment: &Enrollment,
        course: &Course,
        progress: Option<&ProgressRecord>,
    ) {
        let completed = progress.map_or(0, |p| p.completed_modules.len());
        match CompletionStatus::from_completed_count(completed) {
            CompletionStatus::Completed => {
                self.summary.courses_completed += 1;
                // 語数は全モジュール完了時にまとめて加算する
                self.summary.total_words_learned += course.word_count;
            }
            CompletionStatus::InProgress => self.summary.courses_in_progress += 1,
            CompletionStatus::NotStarted => {}
        }

        let clicks = progress.map_or(0, |p| p.vocabulary_clicks.len() as u64);
        self.summary.total_vocabulary_clicked += clicks;

        let level = self
            .levels
            .entry(course.difficulty_level.clone())
            .or_default();
        level.total += course.vocabulary_items.len() as u64;
        level.clicked += clicks;

        if let Some(progress) = progress {
            for result in &progress.quiz_results {
                match course.question_category(&result.question_id) {
                    Some(category) => self.quiz_accuracy.get_mut(category).record(result.is_correct),
                    None => self.skipped_quiz_results += 1,
                }
            }

            self.activity.extend(
                progress
                    .module_completions
                    .iter()
                    .map(|event| event.completed_at),
            );
        }

        // 受講登録そのものも活動として数える
        self.activity.push(enrollment.enrolled_at);
    }

    /// 定義が見つからず捨てたクイズ結果の件数
    pub fn skipped_quiz_results(&self) -> u64 {
        self.skipped_quiz_results
    }

    pub fn finish(self, now: DateTime<Utc>, zone: &ReportTimeZone) -> AnalyticsReport {
        let mut vocabulary_by_level: Vec<VocabularyLevelStats> = self
            .levels
            .into_iter()
            .map(|(level, totals)| VocabularyLevelStats {
                level,
                clicked: totals.clicked,
                total: totals.total,
            })
            .collect();
        // 安定ソートなので未知レベル同士は文字列順のまま末尾に並ぶ
        vocabulary_by_level.sort_by_key(|stats| cefr_rank(&stats.level));

        AnalyticsReport {
            summary: self.summary,
            quiz_accuracy_by_type: self.quiz_accuracy,
            vocabulary_by_level,
            activity_data: daily_histogram(&self.activity, zone),
            weekly_activity: weekly_trend(&self.activity, now, zone),
        }
    }
}
