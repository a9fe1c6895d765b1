// src/repository/enrollment_repository.rs
use crate::domain::enrollment_model::{self, Entity as EnrollmentEntity};
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct EnrollmentRepository {
    db: DbConn,
}

impl EnrollmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<enrollment_model::Model>, DbErr> {
        EnrollmentEntity::find()
            .filter(enrollment_model::Column::UserId.eq(user_id))
            .order_by_asc(enrollment_model::Column::EnrolledAt)
            .all(&self.db)
            .await
    }
}
