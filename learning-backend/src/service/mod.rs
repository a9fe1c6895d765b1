// src/service/mod.rs
pub mod analytics;
pub mod analytics_service;
