//! Append-only journal storage
//!
//! The [`JournalStore`] owns the three persisted collections: chat
//! messages, mood entries, and thought records. Each lives in its own sled
//! tree, keyed by a monotonic big-endian identifier so iteration returns
//! records in append order, with bincode-encoded values. Timestamps
//! round-trip through chrono's RFC 3339 serialization on reload.
//!
//! Mood entries and thought records expose only `append` and `list`; once
//! written they are never mutated or deleted here. Chat history can be
//! reset as a whole, which is the one deliberate exception.

use chrono::Local;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::{MindHelperError, Result};
use crate::logging::OperationTimer;
use crate::metrics::MetricsCollector;
use crate::models::{ChatMessage, MoodEntry, MoodLevel, MoodSummary, NewThoughtRecord, Sender, ThoughtRecord};
use crate::validation::InputValidator;

const MESSAGES_TREE: &str = "messages";
const MOODS_TREE: &str = "moods";
const THOUGHTS_TREE: &str = "thoughts";

/// Store for the three append-only journal collections
pub struct JournalStore {
    db: sled::Db,
    messages: sled::Tree,
    moods: sled::Tree,
    thoughts: sled::Tree,
    metrics: MetricsCollector,
}

impl JournalStore {
    /// Open (or create) the journal database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let timer = OperationTimer::new("journal_store_open");
        let db = sled::open(path.as_ref())?;
        let store = Self::from_db(db)?;
        timer.finish();

        info!(
            messages = store.messages.len(),
            moods = store.moods.len(),
            thoughts = store.thoughts.len(),
            "Journal store opened"
        );
        Ok(store)
    }

    /// Open an in-memory store that is discarded on drop, for tests and
    /// ephemeral sessions
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self> {
        let messages = db.open_tree(MESSAGES_TREE)?;
        let moods = db.open_tree(MOODS_TREE)?;
        let thoughts = db.open_tree(THOUGHTS_TREE)?;

        Ok(Self {
            db,
            messages,
            moods,
            thoughts,
            metrics: MetricsCollector::default(),
        })
    }

    fn next_id(&self) -> Result<u64> {
        Ok(self.db.generate_id()?)
    }

    /// Append a chat message and return the stored record
    pub fn append_message(&self, content: &str, sender: Sender) -> Result<ChatMessage> {
        let start = Instant::now();
        let id = self.next_id()?;
        let message = ChatMessage {
            id,
            content: content.to_string(),
            sender,
            timestamp: Local::now(),
        };

        self.messages
            .insert(id.to_be_bytes(), bincode::serialize(&message)?)?;
        self.metrics.record_store_append(MESSAGES_TREE, start.elapsed());
        debug!(id, sender = %sender, "Appended chat message");

        Ok(message)
    }

    /// All chat messages in append order
    pub fn list_messages(&self) -> Result<Vec<ChatMessage>> {
        self.messages
            .iter()
            .map(|item| {
                let (_, value) = item?;
                Ok(bincode::deserialize(&value)?)
            })
            .collect()
    }

    /// Append a mood entry timestamped now and return the stored record
    pub fn append_mood(&self, mood: MoodLevel) -> Result<MoodEntry> {
        let start = Instant::now();
        let id = self.next_id()?;
        let entry = MoodEntry {
            mood,
            timestamp: Local::now(),
        };

        self.moods
            .insert(id.to_be_bytes(), bincode::serialize(&entry)?)?;
        self.metrics.record_store_append(MOODS_TREE, start.elapsed());
        debug!(mood = %mood, "Appended mood entry");

        Ok(entry)
    }

    /// All mood entries in append order
    pub fn list_moods(&self) -> Result<Vec<MoodEntry>> {
        self.moods
            .iter()
            .map(|item| {
                let (_, value) = item?;
                Ok(bincode::deserialize(&value)?)
            })
            .collect()
    }

    /// Summarize the moods recorded within the last `window_days` days
    pub fn mood_summary(&self, window_days: i64) -> Result<MoodSummary> {
        InputValidator::validate_summary_window(window_days)
            .map_err(|e| MindHelperError::InvalidInput(e.to_string()))?;

        let entries = self.list_moods()?;
        Ok(MoodSummary::compute(&entries, Local::now(), window_days))
    }

    /// Validate and append a thought record.
    ///
    /// An incomplete record is rejected in full; nothing is written.
    pub fn append_thought(&self, new_record: NewThoughtRecord) -> Result<ThoughtRecord> {
        InputValidator::validate_thought_record(&new_record)
            .map_err(|e| MindHelperError::InvalidInput(e.to_string()))?;

        let start = Instant::now();
        let id = self.next_id()?;
        let record = new_record.into_record(id, Local::now());

        self.thoughts
            .insert(id.to_be_bytes(), bincode::serialize(&record)?)?;
        self.metrics.record_store_append(THOUGHTS_TREE, start.elapsed());
        debug!(id, "Appended thought record");

        Ok(record)
    }

    /// All thought records in append order
    pub fn list_thoughts(&self) -> Result<Vec<ThoughtRecord>> {
        self.thoughts
            .iter()
            .map(|item| {
                let (_, value) = item?;
                Ok(bincode::deserialize(&value)?)
            })
            .collect()
    }

    /// Clear the chat history. Moods and thoughts are untouched.
    pub fn reset_conversation(&self) -> Result<()> {
        self.messages.clear()?;
        info!("Chat history cleared");
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}
