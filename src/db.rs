use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{ChatMessage, JournalEntry, MessageKind, MoodRecord, Sender};

#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub mood: i32,
    pub emotions: Vec<String>,
    pub entry_date: NaiveDate,
    pub gratitude: Vec<String>,
    pub goals: Vec<String>,
    pub source_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub journal_entries: Vec<JournalEntry>,
    pub chat_history: Vec<ChatMessage>,
    pub export_date: chrono::DateTime<Utc>,
}

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Sample entries spread over the last two weeks, dated relative to `today`.
pub async fn seed(pool: &PgPool, today: NaiveDate) -> anyhow::Result<usize> {
    let entries = vec![
        (
            "seed-001",
            "Finished the project demo",
            "The demo went well and my manager thanked the whole team.",
            8,
            vec!["Proud", "Grateful"],
            0,
        ),
        (
            "seed-002",
            "Long call with home",
            "Another conversation about marriage plans. I felt unheard.",
            4,
            vec!["Frustrated", "Anxious"],
            3,
        ),
        (
            "seed-003",
            "Quiet Sunday",
            "Slept in, cooked dal, read a few chapters.",
            7,
            vec!["Calm", "Grateful"],
            6,
        ),
        (
            "seed-004",
            "Exam results",
            "Scored lower than I hoped. Spent the evening alone.",
            3,
            vec!["Sad", "Tired"],
            10,
        ),
        (
            "seed-005",
            "Evening walk",
            "Walked by the lake with a friend, felt lighter afterwards.",
            6,
            vec!["Hopeful", "Calm"],
            12,
        ),
    ];

    let mut inserted = 0usize;
    for (source_key, title, content, mood, emotions, days_ago) in entries {
        let entry = NewEntry {
            title: title.to_string(),
            content: content.to_string(),
            mood,
            emotions: emotions.into_iter().map(str::to_string).collect(),
            entry_date: today - Duration::days(days_ago),
            gratitude: Vec::new(),
            goals: Vec::new(),
            source_key: Some(source_key.to_string()),
        };
        if insert_entry(pool, &entry).await?.is_some() {
            inserted += 1;
        }
    }

    info!(inserted, "seeded journal entries");
    Ok(inserted)
}

/// Returns `None` when an entry with the same `source_key` already exists.
pub async fn insert_entry(pool: &PgPool, entry: &NewEntry) -> anyhow::Result<Option<Uuid>> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO mindful.journal_entries
        (id, title, content, mood, emotions, entry_date, gratitude, goals, source_key, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        ON CONFLICT (source_key) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(&entry.title)
    .bind(&entry.content)
    .bind(entry.mood)
    .bind(&entry.emotions)
    .bind(entry.entry_date)
    .bind(&entry.gratitude)
    .bind(&entry.goals)
    .bind(&entry.source_key)
    .bind(now)
    .execute(pool)
    .await
    .context("failed to insert journal entry")?;

    if result.rows_affected() == 0 {
        debug!(source_key = ?entry.source_key, "journal entry already present");
        return Ok(None);
    }
    Ok(Some(id))
}

/// Rewrites an entry in place, keeping its id and `created_at`. Returns
/// whether a row matched.
pub async fn update_entry(pool: &PgPool, id: Uuid, entry: &NewEntry) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE mindful.journal_entries
        SET title = $2,
            content = $3,
            mood = $4,
            emotions = $5,
            entry_date = $6,
            gratitude = $7,
            goals = $8,
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&entry.title)
    .bind(&entry.content)
    .bind(entry.mood)
    .bind(&entry.emotions)
    .bind(entry.entry_date)
    .bind(&entry.gratitude)
    .bind(&entry.goals)
    .execute(pool)
    .await
    .context("failed to update journal entry")?;

    if result.rows_affected() == 0 {
        debug!(%id, "no journal entry to update");
    }
    Ok(result.rows_affected() > 0)
}

pub async fn delete_entry(pool: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM mindful.journal_entries WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

fn entry_from_row(row: PgRow) -> anyhow::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        mood: row.try_get("mood")?,
        emotions: row.try_get("emotions")?,
        entry_date: row.try_get("entry_date")?,
        gratitude: row.try_get("gratitude")?,
        goals: row.try_get("goals")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub async fn fetch_entries(pool: &PgPool) -> anyhow::Result<Vec<JournalEntry>> {
    sqlx::query(
        r#"
        SELECT id, title, content, mood, emotions, entry_date, gratitude, goals,
               created_at, updated_at
        FROM mindful.journal_entries
        ORDER BY entry_date DESC, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(entry_from_row)
    .collect()
}

pub async fn fetch_entry(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<JournalEntry>> {
    sqlx::query(
        r#"
        SELECT id, title, content, mood, emotions, entry_date, gratitude, goals,
               created_at, updated_at
        FROM mindful.journal_entries
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .map(entry_from_row)
    .transpose()
}

pub async fn fetch_mood_records(pool: &PgPool) -> anyhow::Result<Vec<MoodRecord>> {
    let entries = fetch_entries(pool).await?;
    Ok(entries.iter().map(MoodRecord::from).collect())
}

pub async fn import_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        title: String,
        content: String,
        mood: i32,
        emotions: Option<String>,
        entry_date: NaiveDate,
        gratitude: Option<String>,
        goals: Option<String>,
        source_key: Option<String>,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let entry = NewEntry {
            title: row.title,
            content: row.content,
            mood: row.mood,
            emotions: split_labels(row.emotions.as_deref()),
            entry_date: row.entry_date,
            gratitude: split_labels(row.gratitude.as_deref()),
            goals: split_labels(row.goals.as_deref()),
            source_key: Some(
                row.source_key
                    .unwrap_or_else(|| format!("import-{}", Uuid::new_v4())),
            ),
        };

        if insert_entry(pool, &entry).await?.is_some() {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Splits a `;`-separated CSV cell, dropping blanks. Labels keep their case.
pub fn split_labels(cell: Option<&str>) -> Vec<String> {
    cell.unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn save_chat_message(pool: &PgPool, message: &ChatMessage) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO mindful.chat_messages (id, content, sender, kind, sent_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(message.id)
    .bind(&message.content)
    .bind(message.sender.as_str())
    .bind(message.kind.map(MessageKind::as_str))
    .bind(message.sent_at)
    .execute(pool)
    .await
    .context("failed to save chat message")?;
    Ok(())
}

/// Chat history oldest first; `limit` keeps only the most recent messages.
pub async fn fetch_chat_history(
    pool: &PgPool,
    limit: Option<i64>,
) -> anyhow::Result<Vec<ChatMessage>> {
    let rows = sqlx::query(
        r#"
        SELECT id, content, sender, kind, sent_at FROM (
            SELECT id, content, sender, kind, sent_at
            FROM mindful.chat_messages
            ORDER BY sent_at DESC
            LIMIT $1
        ) recent
        ORDER BY sent_at ASC
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut messages = Vec::with_capacity(rows.len());
    for row in rows {
        let sender: String = row.try_get("sender")?;
        let kind: Option<String> = row.try_get("kind")?;
        messages.push(ChatMessage {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            sender: Sender::parse(&sender)
                .with_context(|| format!("unknown sender {sender:?}"))?,
            kind: kind.as_deref().and_then(MessageKind::parse),
            sent_at: row.try_get("sent_at")?,
        });
    }
    Ok(messages)
}

pub async fn export_json(pool: &PgPool, out: &std::path::Path) -> anyhow::Result<ExportBundle> {
    let bundle = ExportBundle {
        journal_entries: fetch_entries(pool).await?,
        chat_history: fetch_chat_history(pool, None).await?,
        export_date: Utc::now(),
    };
    let json = serde_json::to_string_pretty(&bundle)?;
    std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(bundle)
}
