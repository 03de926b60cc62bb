use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{MoodBand, MoodRecord};
use crate::mood::MoodInsights;

pub fn build_report(
    records: &[MoodRecord],
    today: NaiveDate,
    window_days: u32,
    top_n: usize,
) -> String {
    let insights = MoodInsights::compute(records, today, window_days, top_n);
    render(&insights)
}

pub fn render(insights: &MoodInsights) -> String {
    let mut output = String::new();
    let stats = &insights.stats;

    let _ = writeln!(output, "# Mood Insights");
    let _ = writeln!(
        output,
        "Generated for the {} days ending {}",
        insights.series.len(),
        insights.window_end
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overview");

    if stats.total == 0 {
        let _ = writeln!(output, "No journal entries recorded yet.");
    } else {
        let _ = writeln!(
            output,
            "- Average mood: {:.1}/10 ({})",
            stats.average,
            MoodBand::from_average(stats.average).label()
        );
        if insights.has_previous_week {
            let _ = writeln!(output, "- Weekly trend: {:+.0}%", stats.trend);
        } else {
            let _ = writeln!(output, "- Weekly trend: n/a (no entries in the previous week)");
        }
        let _ = writeln!(output, "- Total entries: {}", stats.total);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Daily Mood");
    let _ = writeln!(output, "| Date | Mood | Entries |");
    let _ = writeln!(output, "| --- | --- | --- |");
    for sample in insights.series.iter() {
        let mood = match sample.average {
            Some(average) => format!("{average:.1}"),
            None => "-".to_string(),
        };
        let _ = writeln!(
            output,
            "| {} | {} | {} |",
            sample.date.format("%m/%d"),
            mood,
            sample.count
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Emotions");

    if insights.emotions.is_empty() {
        let _ = writeln!(output, "No emotions tagged yet.");
    } else {
        for rank in insights.emotions.iter() {
            let _ = writeln!(output, "- {}: {}", rank.emotion, rank.count);
        }
    }

    output
}
