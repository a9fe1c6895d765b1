// src/repository/analytics_data_source.rs

use async_trait::async_trait;
use sea_orm::DbConn;
use uuid::Uuid;

use crate::domain::learning_record::{Course, Enrollment, ProgressRecord};
use crate::error::AppResult;
use crate::repository::{
    course_progress_repository::CourseProgressRepository, course_repository::CourseRepository,
    enrollment_repository::EnrollmentRepository,
};

/// 集計が依存する読み取り専用インターフェース
///
/// 保存形式から既定値を補完したドメインレコードを返す。
/// 書き込みは別サービスの責務。
#[async_trait]
pub trait AnalyticsDataSource: Send + Sync {
    /// ユーザーの受講登録一覧
    async fn list_enrollments(&self, user_id: Uuid) -> AppResult<Vec<Enrollment>>;

    /// コース。削除済みなら None
    async fn get_course(&self, course_id: Uuid) -> AppResult<Option<Course>>;

    /// コースの進捗。未着手なら None
    async fn get_progress(&self, course_id: Uuid) -> AppResult<Option<ProgressRecord>>;
}

/// PostgreSQL (SeaORM) 実装
pub struct DatabaseAnalyticsDataSource {
    enrollment_repo: EnrollmentRepository,
    course_repo: CourseRepository,
    progress_repo: CourseProgressRepository,
}

impl DatabaseAnalyticsDataSource {
    pub fn new(db: DbConn) -> Self {
        Self {
            enrollment_repo: EnrollmentRepository::new(db.clone()),
            course_repo: CourseRepository::new(db.clone()),
            progress_repo: CourseProgressRepository::new(db),
        }
    }
}

#[async_trait]
impl AnalyticsDataSource for DatabaseAnalyticsDataSource {
    async fn list_enrollments(&self, user_id: Uuid) -> AppResult<Vec<Enrollment>> {
        let models = self.enrollment_repo.find_by_user_id(user_id).await?;
        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn get_course(&self, course_id: Uuid) -> AppResult<Option<Course>> {
        let model = self.course_repo.find_by_id(course_id).await?;
        Ok(model.map(Course::from))
    }

    async fn get_progress(&self, course_id: Uuid) -> AppResult<Option<ProgressRecord>> {
        let model = self
            .progress_repo
            .find_first_by_course_id(course_id)
            .await?;
        Ok(model.map(ProgressRecord::from))
    }
}
