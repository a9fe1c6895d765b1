// src/domain/cefr_level.rs

/// CEFR の 11 段階。並び順がそのまま表示順になる
pub const CEFR_ORDER: [&str; 11] = [
    "A1", "A1+", "A2", "A2+", "B1", "B1+", "B2", "B2+", "C1", "C1+", "C2",
];

/// 並び替え用の順位。未知のレベルは全既知レベルより後ろ (`CEFR_ORDER.len()`)
pub fn cefr_rank(level: &str) -> usize {
    CEFR_ORDER
        .iter()
        .position(|known| *known == level)
        .unwrap_or(CEFR_ORDER.len())
}
