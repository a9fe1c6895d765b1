// src/repository/course_progress_repository.rs
use crate::domain::course_progress_model::{self, Entity as CourseProgressEntity};
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct CourseProgressRepository {
    db: DbConn,
}

impl CourseProgressRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// コースの進捗レコードは通常 1 件。複数ある場合は作成順で最初のものを返す
    pub async fn find_first_by_course_id(
        &self,
        course_id: Uuid,
    ) -> Result<Option<course_progress_model::Model>, DbErr> {
        CourseProgressEntity::find()
            .filter(course_progress_model::Column::CourseId.eq(course_id))
            .order_by_asc(course_progress_model::Column::CreatedAt)
            .order_by_asc(course_progress_model::Column::Id)
            .one(&self.db)
            .await
    }
}
