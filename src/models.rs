use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Companion,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Companion => "companion",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Sender::User),
            "companion" => Some(Sender::Companion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Prompt,
    Crisis,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Prompt => "prompt",
            MessageKind::Crisis => "crisis",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(MessageKind::Text),
            "prompt" => Some(MessageKind::Prompt),
            "crisis" => Some(MessageKind::Crisis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
    pub kind: Option<MessageKind>,
}

impl ChatMessage {
    /// A message typed by the user. Users never pick the kind.
    pub fn from_user(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::User,
            sent_at,
            kind: Some(MessageKind::Text),
        }
    }

    pub fn from_companion(
        content: impl Into<String>,
        kind: MessageKind,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::Companion,
            sent_at,
            kind: Some(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: i32,
    pub emotions: Vec<String>,
    pub entry_date: NaiveDate,
    pub gratitude: Vec<String>,
    pub goals: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One dated mood observation as seen by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub date: NaiveDate,
    pub mood: i32,
    pub emotions: Vec<String>,
}

impl MoodRecord {
    pub fn new(date: NaiveDate, mood: i32, emotions: Vec<String>) -> Self {
        Self {
            date,
            mood,
            emotions,
        }
    }

    /// Keeps only the calendar day of `at`, in the timestamp's own zone.
    pub fn at<Tz: TimeZone>(at: &DateTime<Tz>, mood: i32, emotions: Vec<String>) -> Self {
        Self::new(at.date_naive(), mood, emotions)
    }
}

impl From<&JournalEntry> for MoodRecord {
    fn from(entry: &JournalEntry) -> Self {
        MoodRecord::new(entry.entry_date, entry.mood, entry.emotions.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySample {
    pub date: NaiveDate,
    /// `None` when no record fell on this day.
    pub average: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendStat {
    pub average: f64,
    pub trend: f64,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionRank {
    pub emotion: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MoodBand {
    Low,
    Neutral,
    High,
}

impl MoodBand {
    pub fn from_score(mood: i32) -> Self {
        match mood {
            i32::MIN..=3 => MoodBand::Low,
            4..=7 => MoodBand::Neutral,
            _ => MoodBand::High,
        }
    }

    /// Same banding for fractional averages.
    pub fn from_average(average: f64) -> Self {
        if average <= 3.0 {
            MoodBand::Low
        } else if average <= 7.0 {
            MoodBand::Neutral
        } else {
            MoodBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodBand::Low => "low",
            MoodBand::Neutral => "neutral",
            MoodBand::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn mood_bands_follow_journal_thresholds() {
        assert_eq!(MoodBand::from_score(1), MoodBand::Low);
        assert_eq!(MoodBand::from_score(3), MoodBand::Low);
        assert_eq!(MoodBand::from_score(4), MoodBand::Neutral);
        assert_eq!(MoodBand::from_score(7), MoodBand::Neutral);
        assert_eq!(MoodBand::from_score(8), MoodBand::High);
        assert_eq!(MoodBand::from_average(7.5), MoodBand::High);
        assert_eq!(MoodBand::from_average(3.0), MoodBand::Low);
    }

    #[test]
    fn record_from_timestamp_keeps_local_calendar_day() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let late_evening = offset.with_ymd_and_hms(2026, 3, 4, 23, 45, 0).unwrap();
        let record = MoodRecord::at(&late_evening, 6, vec!["Calm".to_string()]);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
    }

    #[test]
    fn message_kinds_round_trip_through_labels() {
        for kind in [MessageKind::Text, MessageKind::Prompt, MessageKind::Crisis] {
            assert_eq!(MessageKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(Sender::parse("bot"), None);
    }
}
