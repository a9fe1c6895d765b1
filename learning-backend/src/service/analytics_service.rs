// src/service/analytics_service.rs

use crate::domain::analytics_report::AnalyticsReport;
use crate::domain::learning_record::{Course, Enrollment, ProgressRecord};
use crate::error::AppResult;
use crate::repository::analytics_data_source::AnalyticsDataSource;
use crate::service::analytics::AnalyticsAccumulator;
use crate::types::ReportTimeZone;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// 学習者ダッシュボードの集計サービス
///
/// 永続化は `AnalyticsDataSource` 越しに読み取るだけで、書き込みはしない。
pub struct AnalyticsService {
    source: Arc<dyn AnalyticsDataSource>,
    zone: ReportTimeZone,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn AnalyticsDataSource>, zone: ReportTimeZone) -> Self {
        Self { source, zone }
    }

    /// 現在時刻基準でレポートを作る。未ログインなら `None`
    pub async fn compute_analytics(
        &self,
        user_id: Option<Uuid>,
    ) -> AppResult<Option<AnalyticsReport>> {
        self.compute_analytics_at(user_id, Utc::now()).await
    }

    /// `now` を固定してレポートを作る
    pub async fn compute_analytics_at(
        &self,
        user_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<AnalyticsReport>> {
        let Some(user_id) = user_id else {
            debug!("No authenticated user, skipping analytics");
            return Ok(None);
        };

        let enrollments = self.source.list_enrollments(user_id).await?;
        let enrollment_count = enrollments.len();

        // 受講ごとのコースと進捗は互いに独立なので並行に取得する
        let records = try_join_all(
            enrollments
                .into_iter()
                .map(|enrollment| self.load_course_record(enrollment)),
        )
        .await?;

        let mut accumulator = AnalyticsAccumulator::new();
        let mut skipped_courses = 0usize;
        for (enrollment, course, progress) in records {
            match course {
                Some(course) => accumulator.add_course(&enrollment, &course, progress.as_ref()),
                None => {
                    debug!(
                        user_id = %user_id,
                        course_id = %enrollment.course_id,
                        "Enrollment references a missing course, skipping"
                    );
                    skipped_courses += 1;
                }
            }
        }

        let skipped_quiz_results = accumulator.skipped_quiz_results();
        let report = accumulator.finish(now, &self.zone);

        info!(
            user_id = %user_id,
            enrollment_count,
            courses_completed = report.summary.courses_completed,
            courses_in_progress = report.summary.courses_in_progress,
            total_words_learned = report.summary.total_words_learned,
            skipped_courses,
            skipped_quiz_results,
            "Analytics report computed"
        );

        Ok(Some(report))
    }

    async fn load_course_record(
        &self,
        enrollment: Enrollment,
    ) -> AppResult<(Enrollment, Option<Course>, Option<ProgressRecord>)> {
        let (course, progress) = tokio::try_join!(
            self.source.get_course(enrollment.course_id),
            self.source.get_progress(enrollment.course_id),
        )?;
        Ok((enrollment, course, progress))
    }
}
