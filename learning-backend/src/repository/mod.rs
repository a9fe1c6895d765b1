// src/repository/mod.rs
pub mod analytics_data_source;
pub mod course_progress_repository;
pub mod course_repository;
pub mod enrollment_repository;
