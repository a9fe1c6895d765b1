// src/service/analytics/mod.rs

pub mod accumulator;
pub mod activity;

pub use accumulator::AnalyticsAccumulator;
pub use activity::WEEKS_IN_TREND;
