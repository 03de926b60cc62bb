use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{DailySample, EmotionRank, MoodRecord, TrendStat};

pub const RECENT_WINDOW_DAYS: i64 = 7;
pub const PREVIOUS_WINDOW_DAYS: i64 = 14;

/// One sample per day for the `window_len_days` days ending at `window_end`,
/// oldest first. Days before `NaiveDate::MIN` are left out.
pub fn daily_series(
    records: &[MoodRecord],
    window_end: NaiveDate,
    window_len_days: u32,
) -> Vec<DailySample> {
    let mut by_day: HashMap<NaiveDate, (usize, i64)> = HashMap::new();
    for record in records {
        let entry = by_day.entry(record.date).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += record.mood as i64;
    }

    (0..window_len_days as i64)
        .rev()
        .filter_map(|offset| window_end.checked_sub_signed(Duration::days(offset)))
        .map(|date| match by_day.get(&date) {
            Some(&(count, total)) => DailySample {
                date,
                average: Some(total as f64 / count as f64),
                count,
            },
            None => DailySample {
                date,
                average: None,
                count: 0,
            },
        })
        .collect()
}

fn mean(moods: impl Iterator<Item = i32>) -> Option<f64> {
    let (count, total) = moods.fold((0usize, 0i64), |(count, total), mood| {
        (count + 1, total + mood as i64)
    });
    (count > 0).then(|| total as f64 / count as f64)
}

fn in_recent_week(now: NaiveDate, date: NaiveDate) -> bool {
    (0..=RECENT_WINDOW_DAYS).contains(&(now - date).num_days())
}

fn in_previous_week(now: NaiveDate, date: NaiveDate) -> bool {
    let days = (now - date).num_days();
    days > RECENT_WINDOW_DAYS && days <= PREVIOUS_WINDOW_DAYS
}

/// Week-over-week change. Records dated after `now` fall in neither window.
pub fn trend(records: &[MoodRecord], now: NaiveDate) -> TrendStat {
    let recent = mean(
        records
            .iter()
            .filter(|r| in_recent_week(now, r.date))
            .map(|r| r.mood),
    )
    .unwrap_or(0.0);
    let previous = mean(
        records
            .iter()
            .filter(|r| in_previous_week(now, r.date))
            .map(|r| r.mood),
    )
    .unwrap_or(0.0);

    // Zero when there is no previous week to compare against.
    let change = if previous > 0.0 {
        (recent - previous) / previous * 100.0
    } else {
        0.0
    };

    TrendStat {
        average: mean(records.iter().map(|r| r.mood)).unwrap_or(0.0),
        trend: change,
        total: records.len(),
    }
}

/// Most frequent emotion labels, ties kept in first-seen order.
pub fn emotion_frequency(records: &[MoodRecord], top_n: usize) -> Vec<EmotionRank> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranks: Vec<EmotionRank> = Vec::new();

    for emotion in records.iter().flat_map(|r| r.emotions.iter()) {
        match index.get(emotion.as_str()) {
            Some(&slot) => ranks[slot].count += 1,
            None => {
                index.insert(emotion.as_str(), ranks.len());
                ranks.push(EmotionRank {
                    emotion: emotion.clone(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    ranks.sort_by(|a, b| b.count.cmp(&a.count));
    ranks.truncate(top_n);
    ranks
}

/// Everything the mood screen and report need in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodInsights {
    pub window_end: NaiveDate,
    pub series: Vec<DailySample>,
    pub stats: TrendStat,
    pub emotions: Vec<EmotionRank>,
    /// False when the previous week had no records, so `stats.trend` is the
    /// zero floor rather than a measured change.
    pub has_previous_week: bool,
}

impl MoodInsights {
    pub fn compute(
        records: &[MoodRecord],
        today: NaiveDate,
        window_days: u32,
        top_n: usize,
    ) -> Self {
        let has_previous_week = records.iter().any(|r| in_previous_week(today, r.date));

        Self {
            window_end: today,
            series: daily_series(records, today, window_days),
            stats: trend(records, today),
            emotions: emotion_frequency(records, top_n),
            has_previous_week,
        }
    }
}
