// src/domain/mod.rs
pub mod analytics_report;
pub mod cefr_level;
pub mod completion_status;
pub mod course_model;
pub mod course_progress_model;
pub mod enrollment_model;
pub mod identity;
pub mod learning_record;
pub mod question_category;
mod stored_json;
