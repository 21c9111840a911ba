//! Command-line interface for the MindHelper supportive-conversation core.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use mindhelper::config::AppConfig;
use mindhelper::logging::init_logging;
use mindhelper::metrics::MetricsCollector;
use mindhelper::models::{MoodLevel, NewThoughtRecord};
use mindhelper::{ChatService, JournalStore, Responder};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the journal database path
    #[arg(long)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive supportive chat session
    Chat,
    /// Clear the chat history (moods and thoughts are kept)
    Reset,
    /// Record and review mood entries
    Mood {
        #[command(subcommand)]
        command: MoodCommands,
    },
    /// Record and review CBT thought records
    Thought {
        #[command(subcommand)]
        command: ThoughtCommands,
    },
}

#[derive(Subcommand)]
enum MoodCommands {
    /// Record how you are feeling right now
    Set {
        /// One of: great, good, neutral, low, bad
        level: String,
    },
    /// List all recorded mood entries
    History {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the mood distribution over the recent window
    Summary {
        /// Window length in days (defaults to configuration)
        #[arg(short, long)]
        days: Option<i64>,
    },
}

#[derive(Subcommand)]
enum ThoughtCommands {
    /// Add a thought record; all fields are required
    Add {
        /// What happened, when and where
        #[arg(long)]
        situation: String,

        /// The automatic thought that came up
        #[arg(long)]
        thought: String,

        /// The emotion you felt
        #[arg(long)]
        emotion: String,

        /// How intense the emotion was (1-10)
        #[arg(long)]
        intensity: u8,

        /// Evidence for and against the thought
        #[arg(long)]
        evidence: String,

        /// A balanced alternative thought
        #[arg(long)]
        alternative: String,

        /// The emotion after considering the alternative
        #[arg(long)]
        new_emotion: String,

        /// How intense the emotion is now (1-10)
        #[arg(long)]
        new_intensity: u8,
    },
    /// List all thought records
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_logging(
        Some(&config.get_log_level()),
        config.logging.file_path.as_deref().map(Path::new),
    )?;
    MetricsCollector::init()?;

    let storage_path = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.get_storage_path());
    debug!(path = %storage_path, "Opening journal store");
    let store = JournalStore::open(&storage_path).context("Failed to open journal store")?;

    match cli.command {
        Commands::Chat => run_chat(store, &config)?,
        Commands::Reset => {
            let responder = Responder::new()?;
            let service = ChatService::new(store, responder)?;
            service.reset()?;
            info!("Conversation reset");
        }
        Commands::Mood { command } => run_mood(&store, &config, command)?,
        Commands::Thought { command } => run_thought(&store, command)?,
    }

    Ok(())
}

/// Interactive read-eval-print chat loop over stdin/stdout
fn run_chat(store: JournalStore, config: &AppConfig) -> Result<()> {
    let responder = Responder::new()?;
    let service =
        ChatService::new(store, responder)?.with_message_limit(config.chat.max_message_chars);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Replay existing history so a resumed session has its context
    for message in service.history()? {
        writeln!(out, "[{}] {}", message.sender, message.content)?;
    }
    writeln!(out, "(type 'quit' to end the session)")?;

    let stdin = io::stdin();
    loop {
        write!(out, "you> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        match service.send(input) {
            Some(reply) => writeln!(out, "mindhelper> {reply}")?,
            None => writeln!(out, "mindhelper> (say something and I'll listen)")?,
        }
    }

    if config.storage.flush_on_exit {
        service.store().flush()?;
    }
    info!("Chat session ended");
    Ok(())
}

fn run_mood(store: &JournalStore, config: &AppConfig, command: MoodCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        MoodCommands::Set { level } => {
            let mood: MoodLevel = level.parse()?;
            let entry = store.append_mood(mood)?;
            writeln!(
                out,
                "Recorded mood '{}' at {}",
                entry.mood,
                entry.timestamp.format("%Y-%m-%d %H:%M:%S")
            )?;
        }
        MoodCommands::History { json } => {
            let entries = store.list_moods()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else {
                for entry in entries {
                    writeln!(
                        out,
                        "{}  {}",
                        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        entry.mood
                    )?;
                }
            }
        }
        MoodCommands::Summary { days } => {
            let window = days.unwrap_or(config.mood.summary_window_days);
            let summary = store.mood_summary(window)?;
            writeln!(out, "Moods over the last {window} days ({} entries):", summary.total)?;
            for (level, count) in &summary.counts {
                writeln!(
                    out,
                    "  {:<8} {:>3}  ({:.0}%)",
                    level.to_string(),
                    count,
                    summary.percentage(*level)
                )?;
            }
        }
    }

    Ok(())
}

fn run_thought(store: &JournalStore, command: ThoughtCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        ThoughtCommands::Add {
            situation,
            thought,
            emotion,
            intensity,
            evidence,
            alternative,
            new_emotion,
            new_intensity,
        } => {
            let record = store.append_thought(NewThoughtRecord {
                situation,
                automatic_thought: thought,
                emotion,
                intensity,
                evidence,
                alternative_thought: alternative,
                new_emotion,
                new_intensity,
            })?;
            writeln!(
                out,
                "Recorded thought #{} at {}",
                record.id,
                record.created_at.format("%Y-%m-%d %H:%M:%S")
            )?;
        }
        ThoughtCommands::List { json } => {
            let records = store.list_thoughts()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
            } else {
                for record in records {
                    writeln!(
                        out,
                        "#{} {}  {} ({} {}/10 -> {} {}/10)",
                        record.id,
                        record.created_at.format("%Y-%m-%d"),
                        record.situation,
                        record.emotion,
                        record.intensity,
                        record.new_emotion,
                        record.new_intensity
                    )?;
                }
            }
        }
    }

    Ok(())
}
