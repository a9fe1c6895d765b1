// src/service/analytics/activity.rs
//
// 学習イベントの時刻から日別ヒストグラムと週次推移を作る。

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use crate::domain::analytics_report::{DailyActivity, WeeklyActivity};
use crate::types::ReportTimeZone;

/// 週次推移の週数
pub const WEEKS_IN_TREND: usize = 12;

/// ローカル暦の日付ごとに件数を数える。件数 0 の日は出さない
pub fn daily_histogram(timestamps: &[DateTime<Utc>], zone: &ReportTimeZone) -> Vec<DailyActivity> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for instant in timestamps {
        *counts.entry(zone.date_key(*instant)).or_insert(0) += 1;
    }

    // YYYY-MM-DD はゼロ埋めなので文字列順 = 日付順
    counts
        .into_iter()
        .map(|(date, count)| DailyActivity { date, count })
        .collect()
}

/// `now` で終わる 7 日幅 12 区間。古い週が先頭で、0 件の週も必ず出す
///
/// 区間 i (11 → 0) は `[now - (i+1)*7d, now - i*7d)`。
pub fn weekly_trend(
    timestamps: &[DateTime<Utc>],
    now: DateTime<Utc>,
    zone: &ReportTimeZone,
) -> Vec<WeeklyActivity> {
    (0..WEEKS_IN_TREND)
        .rev()
        .map(|weeks_ago| {
            let (start, end) = week_bounds(now, weeks_ago);
            let count = timestamps
                .iter()
                .filter(|instant| **instant >= start && **instant < end)
                .count() as u64;

            WeeklyActivity {
                week_label: zone.month_day_label(start),
                count,
            }
        })
        .collect()
}

fn week_bounds(now: DateTime<Utc>, weeks_ago: usize) -> (DateTime<Utc>, DateTime<Utc>) {
    let weeks_ago = weeks_ago as i64;
    let end = now - Duration::days(7 * weeks_ago);
    let start = now - Duration::days(7 * (weeks_ago + 1));
    (start, end)
}
