use chrono::{Datelike, Duration, NaiveDate};

use crate::db::NewEntry;
use crate::models::{JournalEntry, MoodBand};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Period {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl Period {
    /// Weeks start on Sunday; months are calendar months.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Today => date == today,
            Period::Week => {
                let week_start =
                    today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                date >= week_start && date < week_start + Duration::days(7)
            }
            Period::Month => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    pub search: Option<String>,
    pub period: Period,
    pub band: Option<MoodBand>,
}

impl JournalFilter {
    pub fn matches(&self, entry: &JournalEntry, today: NaiveDate) -> bool {
        let matches_search = match self.search.as_deref().map(str::to_lowercase) {
            None => true,
            Some(term) => {
                entry.title.to_lowercase().contains(&term)
                    || entry.content.to_lowercase().contains(&term)
                    || entry
                        .emotions
                        .iter()
                        .any(|emotion| emotion.to_lowercase().contains(&term))
            }
        };

        let matches_band = self
            .band
            .map_or(true, |band| MoodBand::from_score(entry.mood) == band);

        matches_search && matches_band && self.period.contains(entry.entry_date, today)
    }

    /// Matching entries, newest first.
    pub fn apply<'a>(&self, entries: &'a [JournalEntry], today: NaiveDate) -> Vec<&'a JournalEntry> {
        let mut matched: Vec<&JournalEntry> = entries
            .iter()
            .filter(|entry| self.matches(entry, today))
            .collect();
        matched.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        matched
    }
}

/// Changes to an existing entry. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<i32>,
    pub emotions: Option<Vec<String>>,
    pub entry_date: Option<NaiveDate>,
    pub gratitude: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.mood.is_none()
            && self.emotions.is_none()
            && self.entry_date.is_none()
            && self.gratitude.is_none()
            && self.goals.is_none()
    }

    pub fn apply_to(self, entry: &JournalEntry) -> NewEntry {
        NewEntry {
            title: self.title.unwrap_or_else(|| entry.title.clone()),
            content: self.content.unwrap_or_else(|| entry.content.clone()),
            mood: self.mood.unwrap_or(entry.mood),
            emotions: self.emotions.unwrap_or_else(|| entry.emotions.clone()),
            entry_date: self.entry_date.unwrap_or(entry.entry_date),
            gratitude: self.gratitude.unwrap_or_else(|| entry.gratitude.clone()),
            goals: self.goals.unwrap_or_else(|| entry.goals.clone()),
            source_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_entry(title: &str, mood: i32, entry_date: NaiveDate, emotions: &[&str]) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "Wrote a few lines after dinner".to_string(),
            mood,
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            entry_date,
            gratitude: Vec::new(),
            goals: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2026-03-18 is a Wednesday
        let today = day(2026, 3, 18);
        assert!(Period::Week.contains(day(2026, 3, 15), today));
        assert!(Period::Week.contains(day(2026, 3, 21), today));
        assert!(!Period::Week.contains(day(2026, 3, 14), today));
        assert!(Period::Month.contains(day(2026, 3, 1), today));
        assert!(!Period::Month.contains(day(2025, 3, 18), today));
    }

    #[test]
    fn search_covers_title_content_and_emotions() {
        let today = day(2026, 3, 18);
        let entries = vec![
            sample_entry("Exam week", 3, day(2026, 3, 17), &["Anxious"]),
            sample_entry("Beach trip", 9, day(2026, 3, 10), &["Joyful"]),
        ];
        let filter = JournalFilter {
            search: Some("anx".to_string()),
            ..Default::default()
        };
        let found = filter.apply(&entries, today);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Exam week");

        let filter = JournalFilter {
            search: Some("DINNER".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&entries, today).len(), 2);
    }

    #[test]
    fn band_and_period_combine_and_sort_newest_first() {
        let today = day(2026, 3, 18);
        let entries = vec![
            sample_entry("older high", 8, day(2026, 3, 2), &[]),
            sample_entry("newer high", 10, day(2026, 3, 16), &[]),
            sample_entry("low", 2, day(2026, 3, 17), &[]),
        ];
        let filter = JournalFilter {
            band: Some(MoodBand::High),
            period: Period::Month,
            ..Default::default()
        };
        let titles: Vec<_> = filter
            .apply(&entries, today)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["newer high", "older high"]);

        let filter = JournalFilter {
            band: Some(MoodBand::High),
            period: Period::Week,
            ..Default::default()
        };
        assert_eq!(filter.apply(&entries, today).len(), 1);
    }

    #[test]
    fn edit_replaces_only_the_fields_it_sets() {
        let mut entry = sample_entry("Exam week", 3, day(2026, 3, 17), &["Anxious"]);
        entry.goals = vec!["Sleep by 11".to_string()];

        let edit = EntryEdit {
            title: Some("Exam week, day two".to_string()),
            mood: Some(5),
            emotions: Some(vec!["Calm".to_string(), "Tired".to_string()]),
            ..Default::default()
        };
        assert!(!edit.is_empty());

        let updated = edit.apply_to(&entry);
        assert_eq!(updated.title, "Exam week, day two");
        assert_eq!(updated.mood, 5);
        assert_eq!(updated.emotions, vec!["Calm", "Tired"]);
        assert_eq!(updated.content, entry.content);
        assert_eq!(updated.entry_date, day(2026, 3, 17));
        assert_eq!(updated.goals, vec!["Sleep by 11"]);
        assert!(updated.gratitude.is_empty());
    }

    #[test]
    fn empty_edit_reproduces_the_entry() {
        let entry = sample_entry("Beach trip", 9, day(2026, 3, 10), &["Joyful"]);
        let edit = EntryEdit::default();
        assert!(edit.is_empty());

        let same = edit.apply_to(&entry);
        assert_eq!(same.title, entry.title);
        assert_eq!(same.mood, entry.mood);
        assert_eq!(same.emotions, entry.emotions);
        assert_eq!(same.entry_date, entry.entry_date);
    }
}
