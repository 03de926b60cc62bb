use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod chat;
mod classifier;
mod config;
mod db;
mod journal;
mod lexicon;
mod models;
mod mood;
mod pacing;
mod report;
mod responder;
mod responses;

use chat::{ChatSession, Turn};
use classifier::Classifier;
use config::Config;
use journal::{EntryEdit, JournalFilter, Period};
use models::{ChatMessage, MessageKind, MoodBand, Sender};
use mood::MoodInsights;
use pacing::ReplyPacing;
use responder::{ReplyTone, Responder};

#[derive(Parser)]
#[command(name = "mindful-companion")]
#[command(about = "Supportive chat companion and mood journal insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load sample journal entries
    Seed,
    /// Import journal entries from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Manage journal entries
    Journal {
        #[command(subcommand)]
        command: JournalCommand,
    },
    /// Talk with the companion
    Chat {
        /// Send a single message instead of reading from stdin
        #[arg(long)]
        message: Option<String>,
        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_delay: bool,
        /// Do not store the conversation
        #[arg(long)]
        no_save: bool,
    },
    /// Print a reflective prompt for today
    Prompt {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show how a message would be classified
    Classify { text: String },
    /// Print mood statistics
    Mood {
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        top: Option<usize>,
        /// Last day of the window (defaults to today)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Generate a markdown mood report
    Report {
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        top: Option<usize>,
        #[arg(long, default_value = "mood-report.md")]
        out: PathBuf,
    },
    /// Export journal entries and chat history as JSON
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum JournalCommand {
    /// Add an entry
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
        mood: i32,
        #[arg(long, value_delimiter = ',')]
        emotions: Vec<String>,
        /// Entry date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_delimiter = ',')]
        gratitude: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        goals: Vec<String>,
    },
    /// List entries, newest first
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t = Period::All)]
        period: Period,
        #[arg(long, value_enum)]
        band: Option<MoodBand>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Change fields of an existing entry
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
        mood: Option<i32>,
        #[arg(long, value_delimiter = ',')]
        emotions: Option<Vec<String>>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_delimiter = ',')]
        gratitude: Option<Vec<String>>,
        #[arg(long, value_delimiter = ',')]
        goals: Option<Vec<String>>,
    },
    /// Delete an entry by id
    Delete { id: Uuid },
}

async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let database_url = config
        .database_url()
        .context("DATABASE_URL must be set to a Postgres instance")?;
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")
}

fn print_companion(message: &ChatMessage, tone: Option<ReplyTone>) {
    let tag = match (message.kind, tone) {
        (Some(MessageKind::Crisis), _) => "companion (urgent)",
        (Some(MessageKind::Prompt), _) => "companion (prompt)",
        (_, Some(ReplyTone::Celebration)) => "companion (celebrating)",
        _ => "companion",
    };
    println!("{tag}: {}", message.content);
}

async fn deliver(turn: Turn, pool: Option<&PgPool>, paced: bool) -> anyhow::Result<()> {
    let resources = turn.reply.resources().to_vec();
    let tone = turn.reply.tone();
    if paced {
        tokio::time::sleep(turn.reply_delay).await;
    }

    let mut replies = turn.reply.into_messages(Utc::now()).into_iter();
    if let Some(primary) = replies.next() {
        print_companion(&primary, Some(tone));
        for resource in resources.iter() {
            println!("  - {resource}");
        }
        if let Some(pool) = pool {
            db::save_chat_message(pool, &primary).await?;
        }
    }

    for mut follow_up in replies {
        if paced {
            tokio::time::sleep(turn.follow_up_delay).await;
        }
        follow_up.sent_at = Utc::now();
        print_companion(&follow_up, None);
        if let Some(pool) = pool {
            db::save_chat_message(pool, &follow_up).await?;
        }
    }

    Ok(())
}

async fn run_chat(
    config: &Config,
    message: Option<String>,
    seed: Option<u64>,
    no_delay: bool,
    no_save: bool,
) -> anyhow::Result<()> {
    let pool = if no_save {
        None
    } else {
        match connect(config).await {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!("chat history will not be saved: {err:#}");
                None
            }
        }
    };

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pacing = if no_delay {
        ReplyPacing::immediate()
    } else {
        config.pacing
    };
    let mut session = ChatSession::new(Classifier::default(), Responder::default(), pacing, rng);

    if let Some(text) = message {
        if let Some(turn) = session.turn(&text, Utc::now()) {
            if let Some(pool) = pool.as_ref() {
                db::save_chat_message(pool, &turn.user).await?;
            }
            deliver(turn, pool.as_ref(), false).await?;
        }
        return Ok(());
    }

    if let Some(pool) = pool.as_ref() {
        for earlier in db::fetch_chat_history(pool, Some(6)).await? {
            let who = match earlier.sender {
                Sender::User => "you",
                Sender::Companion => "companion",
            };
            println!("{who}: {}", earlier.content);
        }
    }

    let opening = session.opening_prompt(Utc::now());
    print_companion(&opening, None);
    println!("(type a message, or press Ctrl-D to leave)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(turn) = session.turn(&line, Utc::now()) else {
            continue;
        };
        info!(
            category = %turn.classification.category,
            crisis = turn.classification.crisis,
            "companion replying"
        );
        if let Some(pool) = pool.as_ref() {
            db::save_chat_message(pool, &turn.user).await?;
        }
        deliver(turn, pool.as_ref(), !no_delay).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let today = Local::now().date_naive();

    match cli.command {
        Commands::InitDb => {
            let pool = connect(&config).await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            let pool = connect(&config).await?;
            let inserted = db::seed(&pool, today).await?;
            println!("Inserted {inserted} sample entries.");
        }
        Commands::Import { csv } => {
            let pool = connect(&config).await?;
            let inserted = db::import_csv(&pool, &csv).await?;
            println!("Inserted {inserted} entries from {}.", csv.display());
        }
        Commands::Journal { command } => {
            let pool = connect(&config).await?;
            match command {
                JournalCommand::Add {
                    title,
                    content,
                    mood,
                    emotions,
                    date,
                    gratitude,
                    goals,
                } => {
                    let entry = db::NewEntry {
                        title,
                        content,
                        mood,
                        emotions,
                        entry_date: date.unwrap_or(today),
                        gratitude,
                        goals,
                        source_key: None,
                    };
                    let id = db::insert_entry(&pool, &entry)
                        .await?
                        .context("journal entry was not inserted")?;
                    println!("Saved entry {id}.");
                }
                JournalCommand::List {
                    search,
                    period,
                    band,
                    limit,
                } => {
                    let entries = db::fetch_entries(&pool).await?;
                    let filter = JournalFilter {
                        search,
                        period,
                        band,
                    };
                    let matched = filter.apply(&entries, today);
                    if matched.is_empty() {
                        println!("No entries match.");
                        return Ok(());
                    }
                    println!("{} of {} entries:", matched.len(), entries.len());
                    for entry in matched.iter().take(limit) {
                        println!(
                            "- {} {} [{}/10, {}] {} ({})",
                            entry.entry_date,
                            entry.title,
                            entry.mood,
                            MoodBand::from_score(entry.mood).label(),
                            entry.emotions.join(", "),
                            entry.id
                        );
                    }
                }
                JournalCommand::Edit {
                    id,
                    title,
                    content,
                    mood,
                    emotions,
                    date,
                    gratitude,
                    goals,
                } => {
                    let edit = EntryEdit {
                        title,
                        content,
                        mood,
                        emotions,
                        entry_date: date,
                        gratitude,
                        goals,
                    };
                    if edit.is_empty() {
                        println!("Nothing to change.");
                        return Ok(());
                    }
                    let Some(current) = db::fetch_entry(&pool, id).await? else {
                        println!("No entry with id {id}.");
                        return Ok(());
                    };
                    let updated = edit.apply_to(&current);
                    if db::update_entry(&pool, id, &updated).await? {
                        println!(
                            "Updated {id}: {} {} [{}/10]",
                            updated.entry_date, updated.title, updated.mood
                        );
                    } else {
                        println!("No entry with id {id}.");
                    }
                }
                JournalCommand::Delete { id } => {
                    if db::delete_entry(&pool, id).await? {
                        println!("Deleted {id}.");
                    } else {
                        println!("No entry with id {id}.");
                    }
                }
            }
        }
        Commands::Chat {
            message,
            seed,
            no_delay,
            no_save,
        } => {
            run_chat(&config, message, seed, no_delay, no_save).await?;
        }
        Commands::Prompt { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            println!("{}", Responder::default().daily_prompt(&mut rng));
        }
        Commands::Classify { text } => {
            let classification = Classifier::default().classify(&text);
            println!(
                "category: {} (crisis: {})",
                classification.category, classification.crisis
            );
        }
        Commands::Mood { days, top, end } => {
            let pool = connect(&config).await?;
            let records = db::fetch_mood_records(&pool).await?;
            let insights = MoodInsights::compute(
                &records,
                end.unwrap_or(today),
                days.unwrap_or(config.mood_window_days),
                top.unwrap_or(config.top_emotions),
            );

            let stats = &insights.stats;
            println!("Average mood: {:.1}/10", stats.average);
            if insights.has_previous_week {
                println!("Weekly trend: {:+.1}%", stats.trend);
            } else {
                println!("Weekly trend: n/a");
            }
            println!("Total entries: {}", stats.total);
            println!("Daily mood:");
            for sample in insights.series.iter() {
                match sample.average {
                    Some(average) => println!(
                        "  {} {:>4.1} ({} entries)",
                        sample.date.format("%m/%d"),
                        average,
                        sample.count
                    ),
                    None => println!("  {}    -", sample.date.format("%m/%d")),
                }
            }
            if !insights.emotions.is_empty() {
                println!("Top emotions:");
                for rank in insights.emotions.iter() {
                    println!("  {} x{}", rank.emotion, rank.count);
                }
            }
        }
        Commands::Report { days, top, out } => {
            let pool = connect(&config).await?;
            let records = db::fetch_mood_records(&pool).await?;
            let report = report::build_report(
                &records,
                today,
                days.unwrap_or(config.mood_window_days),
                top.unwrap_or(config.top_emotions),
            );
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { out } => {
            let pool = connect(&config).await?;
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!("mindful-journal-export-{}.json", today.format("%Y-%m-%d")))
            });
            let bundle = db::export_json(&pool, &out).await?;
            println!(
                "Exported {} entries and {} messages to {}.",
                bundle.journal_entries.len(),
                bundle.chat_history.len(),
                out.display()
            );
        }
    }

    Ok(())
}
