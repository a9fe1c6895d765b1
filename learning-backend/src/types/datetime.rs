use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use std::fmt;
use std::str::FromStr;

/// 日付キーと週ラベルを決める暦
///
/// 保存データはタイムゾーンを持たないので、既定は実行環境のローカル時刻。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTimeZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl ReportTimeZone {
    pub fn utc() -> Self {
        ReportTimeZone::Fixed(Utc.fix())
    }

    /// YYYY-MM-DD
    pub fn date_key(&self, instant: DateTime<Utc>) -> String {
        self.format(instant, "%Y-%m-%d")
    }

    /// M/D (ゼロ埋めなし)
    pub fn month_day_label(&self, instant: DateTime<Utc>) -> String {
        self.format(instant, "%-m/%-d")
    }

    fn format(&self, instant: DateTime<Utc>, pattern: &str) -> String {
        match self {
            ReportTimeZone::Local => instant.with_timezone(&Local).format(pattern).to_string(),
            ReportTimeZone::Fixed(offset) => {
                instant.with_timezone(offset).format(pattern).to_string()
            }
        }
    }
}

impl fmt::Display for ReportTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportTimeZone::Local => f.write_str("local"),
            ReportTimeZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for ReportTimeZone {
    type Err = String;

    /// `local`, `Z`/`UTC` と `+09:00`/`-0530` 形式のオフセットを受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(ReportTimeZone::Local),
            "z" | "utc" => Ok(ReportTimeZone::utc()),
            _ => trimmed
                .parse::<FixedOffset>()
                .map(ReportTimeZone::Fixed)
                .map_err(|e| format!("Invalid UTC offset: {} ({})", s, e)),
        }
    }
}
