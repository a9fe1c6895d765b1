// src/domain/question_category.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// クイズ問題の分類。正答率はこの 3 区分で集計する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    MainIdea,
    Detail,
    Vocabulary,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 3] = [
        QuestionCategory::MainIdea,
        QuestionCategory::Detail,
        QuestionCategory::Vocabulary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::MainIdea => "main-idea",
            QuestionCategory::Detail => "detail",
            QuestionCategory::Vocabulary => "vocabulary",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main-idea" => Ok(QuestionCategory::MainIdea),
            "detail" => Ok(QuestionCategory::Detail),
            "vocabulary" => Ok(QuestionCategory::Vocabulary),
            other => Err(format!("Unknown question category: {}", other)),
        }
    }
}

/// 語彙項目ごとの分類 (コースの CEFR 難易度とは別物)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyCategory {
    Essential,
    Transferable,
    Extended,
    /// 保存値が欠けている・未知の値
    Unclassified,
}

impl From<Option<&str>> for ProficiencyCategory {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some("essential") => ProficiencyCategory::Essential,
            Some("transferable") => ProficiencyCategory::Transferable,
            Some("extended") => ProficiencyCategory::Extended,
            _ => ProficiencyCategory::Unclassified,
        }
    }
}
