// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 学習データ（読み取り側）テーブル
mod m20250701_000001_create_courses_table;
mod m20250701_000002_create_enrollments_table;
mod m20250701_000003_create_course_progress_table;
mod m20250701_000004_add_analytics_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成
            Box::new(m20250701_000001_create_courses_table::Migration),
            Box::new(m20250701_000002_create_enrollments_table::Migration),
            Box::new(m20250701_000003_create_course_progress_table::Migration),
            // 2. 集計クエリ用インデックス
            Box::new(m20250701_000004_add_analytics_indexes::Migration),
        ]
    }
}
