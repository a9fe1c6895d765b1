// src/domain/completion_status.rs
/// 1 コースあたりの学習モジュール数 (固定)
pub const TOTAL_MODULES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl CompletionStatus {
    pub fn from_completed_count(completed: usize) -> Self {
        match completed {
            0 => CompletionStatus::NotStarted,
            n if n >= TOTAL_MODULES => CompletionStatus::Completed,
            _ => CompletionStatus::InProgress,
        }
    }

    /// 有効なモジュール番号か (1..=6)
    pub fn is_valid_module(module_number: i64) -> bool {
        (1..=TOTAL_MODULES as i64).contains(&module_number)
    }
}
