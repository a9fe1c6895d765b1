// tests/common/mock_data_source.rs

use async_trait::async_trait;
use learning_backend::domain::learning_record::{Course, Enrollment, ProgressRecord};
use learning_backend::error::AppResult;
use learning_backend::repository::analytics_data_source::AnalyticsDataSource;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// テスト用のインメモリデータソース
#[derive(Clone, Default)]
pub struct MockAnalyticsDataSource {
    enrollments: Arc<Mutex<Vec<Enrollment>>>,
    courses: Arc<Mutex<HashMap<Uuid, Course>>>,
    progress: Arc<Mutex<HashMap<Uuid, ProgressRecord>>>,
    fail_progress_for: Arc<Mutex<Option<Uuid>>>,
    course_reads: Arc<AtomicUsize>,
    progress_reads: Arc<AtomicUsize>,
}

impl MockAnalyticsDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enrollment(&self, enrollment: Enrollment) {
        self.enrollments.lock().unwrap().push(enrollment);
    }

    pub fn add_course(&self, course: Course) {
        self.courses.lock().unwrap().insert(course.id, course);
    }

    pub fn set_progress(&self, progress: ProgressRecord) {
        self.progress
            .lock()
            .unwrap()
            .insert(progress.course_id, progress);
    }

    /// 指定コースの進捗読み取りを接続エラーにする
    pub fn fail_progress_for(&self, course_id: Uuid) {
        *self.fail_progress_for.lock().unwrap() = Some(course_id);
    }

    pub fn course_reads(&self) -> usize {
        self.course_reads.load(Ordering::SeqCst)
    }

    pub fn progress_reads(&self) -> usize {
        self.progress_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalyticsDataSource for MockAnalyticsDataSource {
    async fn list_enrollments(&self, user_id: Uuid) -> AppResult<Vec<Enrollment>> {
        let enrollments = self.enrollments.lock().unwrap();
        Ok(enrollments
            .iter()
            .filter(|enrollment| enrollment.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_course(&self, course_id: Uuid) -> AppResult<Option<Course>> {
        self.course_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.courses.lock().unwrap().get(&course_id).cloned())
    }

    async fn get_progress(&self, course_id: Uuid) -> AppResult<Option<ProgressRecord>> {
        self.progress_reads.fetch_add(1, Ordering::SeqCst);
        if *self.fail_progress_for.lock().unwrap() == Some(course_id) {
            return Err(DbErr::Conn(sea_orm::RuntimeErr::Internal(
                "connection reset".to_string(),
            ))
            .into());
        }
        Ok(self.progress.lock().unwrap().get(&course_id).cloned())
    }
}
