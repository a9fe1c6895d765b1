// src/repository/course_repository.rs
use crate::domain::course_model::{self, Entity as CourseEntity};
use sea_orm::{DbConn, DbErr, EntityTrait};
use uuid::Uuid;

pub struct CourseRepository {
    db: DbConn,
}

impl CourseRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<course_model::Model>, DbErr> {
        CourseEntity::find_by_id(id).one(&self.db).await
    }
}
