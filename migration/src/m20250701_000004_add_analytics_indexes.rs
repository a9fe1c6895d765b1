use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ダッシュボードはユーザー単位で受講一覧を引く
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Enrollments::Table)
                    .name("idx_enrollments_user_id")
                    .col(Enrollments::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Enrollments::Table)
                    .name("idx_enrollments_user_course")
                    .col(Enrollments::UserId)
                    .col(Enrollments::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(CourseProgress::Table)
                    .name("idx_course_progress_course_id")
                    .col(CourseProgress::CourseId)
                    .col(CourseProgress::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_progress_course_id")
                    .table(CourseProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollments_user_course")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollments_user_id")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    UserId,
    CourseId,
}

#[derive(DeriveIden)]
enum CourseProgress {
    Table,
    CourseId,
    CreatedAt,
}
