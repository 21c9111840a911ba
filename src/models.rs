//! Data models for the supportive-conversation engine and journal storage
//!
//! This module contains all data structures used throughout the application,
//! including message categories, chat messages, mood entries, and thought records.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The semantic category assigned to a single user message.
///
/// Assignment is total: every input maps to exactly one category, with
/// `Unknown` as the fallback. The variant order here mirrors the rule
/// priority used by the categorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Crisis language; forces the fixed safety-resource reply
    Suicidal,
    /// Message opens with a greeting word
    Greeting,
    /// Positive mood language
    MoodPositive,
    /// Negative mood language
    MoodNegative,
    /// Anxiety, worry, or fear
    Anxiety,
    /// Depression-specific language
    Depression,
    /// Stress and overwhelm
    Stress,
    /// Sleep difficulties
    Sleep,
    /// Thanks and appreciation
    Gratitude,
    /// All-or-nothing language ("always", "never", "should", ...)
    ThoughtDistortion,
    /// Abuse or safety concerns
    Abuse,
    /// Substance use concerns
    Substance,
    /// Message contains a question mark
    GeneralQuestion,
    /// Fallback when no rule matches
    Unknown,
}

impl Category {
    /// Every category, in declaration order.
    ///
    /// Used to verify at startup that every category has a reply pool.
    pub const ALL: [Self; 14] = [
        Self::Suicidal,
        Self::Greeting,
        Self::MoodPositive,
        Self::MoodNegative,
        Self::Anxiety,
        Self::Depression,
        Self::Stress,
        Self::Sleep,
        Self::Gratitude,
        Self::ThoughtDistortion,
        Self::Abuse,
        Self::Substance,
        Self::GeneralQuestion,
        Self::Unknown,
    ];

    /// Stable tag for this category, used in logs and metrics labels
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::MoodPositive => "mood_positive",
            Self::MoodNegative => "mood_negative",
            Self::Anxiety => "anxiety",
            Self::Depression => "depression",
            Self::Stress => "stress",
            Self::Sleep => "sleep",
            Self::GeneralQuestion => "general_question",
            Self::Gratitude => "gratitude",
            Self::ThoughtDistortion => "thought_distortion",
            Self::Suicidal => "suicidal",
            Self::Abuse => "abuse",
            Self::Substance => "substance",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person using the assistant
    User,
    /// The assistant itself
    Assistant,
}

impl Sender {
    /// Stable tag for this sender
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message, append-only once stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Storage-assigned identifier
    pub id: u64,
    /// Message text content
    pub content: String,
    /// Message author
    pub sender: Sender,
    /// Timestamp when the message was recorded
    pub timestamp: DateTime<Local>,
}

/// Five-point ordinal mood scale, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    /// Feeling great
    Great,
    /// Feeling good
    Good,
    /// Feeling okay
    Neutral,
    /// Feeling low
    Low,
    /// Feeling bad
    Bad,
}

impl MoodLevel {
    /// Every mood level, best to worst
    pub const ALL: [Self; 5] = [Self::Great, Self::Good, Self::Neutral, Self::Low, Self::Bad];

    /// Stable tag for this mood level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Low => "low",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "great" => Ok(Self::Great),
            "good" => Ok(Self::Good),
            "neutral" | "okay" => Ok(Self::Neutral),
            "low" => Ok(Self::Low),
            "bad" => Ok(Self::Bad),
            other => Err(anyhow::anyhow!(
                "Unknown mood level: {other}. Expected one of: great, good, neutral, low, bad"
            )),
        }
    }
}

/// A recorded mood at a point in time, append-only once stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Recorded mood level
    pub mood: MoodLevel,
    /// Timestamp when the mood was recorded
    pub timestamp: DateTime<Local>,
}

/// A completed CBT thought record, append-only once stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtRecord {
    /// Storage-assigned identifier
    pub id: u64,
    /// What happened, when and where
    pub situation: String,
    /// The automatic thought that came up
    pub automatic_thought: String,
    /// The emotion felt at the time
    pub emotion: String,
    /// Emotional intensity before reframing (1-10)
    pub intensity: u8,
    /// Evidence for and against the automatic thought
    pub evidence: String,
    /// A balanced alternative thought
    pub alternative_thought: String,
    /// The emotion after considering the alternative
    pub new_emotion: String,
    /// Emotional intensity after reframing (1-10)
    pub new_intensity: u8,
    /// Timestamp when the record was created
    pub created_at: DateTime<Local>,
}

/// Data for creating a new thought record.
///
/// All seven payload fields are mandatory; validation rejects the record
/// before anything is appended. The identifier and creation timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewThoughtRecord {
    /// What happened, when and where
    pub situation: String,
    /// The automatic thought that came up
    pub automatic_thought: String,
    /// The emotion felt at the time
    pub emotion: String,
    /// Emotional intensity before reframing (1-10)
    pub intensity: u8,
    /// Evidence for and against the automatic thought
    pub evidence: String,
    /// A balanced alternative thought
    pub alternative_thought: String,
    /// The emotion after considering the alternative
    pub new_emotion: String,
    /// Emotional intensity after reframing (1-10)
    pub new_intensity: u8,
}

impl NewThoughtRecord {
    /// Attach a storage identifier and creation timestamp
    #[must_use]
    pub fn into_record(self, id: u64, created_at: DateTime<Local>) -> ThoughtRecord {
        ThoughtRecord {
            id,
            situation: self.situation,
            automatic_thought: self.automatic_thought,
            emotion: self.emotion,
            intensity: self.intensity,
            evidence: self.evidence,
            alternative_thought: self.alternative_thought,
            new_emotion: self.new_emotion,
            new_intensity: self.new_intensity,
            created_at,
        }
    }
}

/// Per-level mood distribution over a recent window
#[derive(Debug, Clone, Serialize)]
pub struct MoodSummary {
    /// Number of entries inside the window
    pub total: usize,
    /// Entry counts per mood level, best to worst
    pub counts: Vec<(MoodLevel, usize)>,
}

impl MoodSummary {
    /// Summarize the entries recorded within the last `window_days` days.
    ///
    /// An entry is inside the window when its timestamp is strictly after
    /// `now - window_days`, so an entry recorded exactly at the cutoff is
    /// excluded.
    #[must_use]
    pub fn compute(entries: &[MoodEntry], now: DateTime<Local>, window_days: i64) -> Self {
        let cutoff = now - Duration::days(window_days);

        let recent: Vec<&MoodEntry> = entries
            .iter()
            .filter(|entry| entry.timestamp > cutoff)
            .collect();

        let counts = MoodLevel::ALL
            .iter()
            .map(|level| {
                let count = recent.iter().filter(|entry| entry.mood == *level).count();
                (*level, count)
            })
            .collect();

        Self {
            total: recent.len(),
            counts,
        }
    }

    /// Share of window entries at the given level, 0-100
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, level: MoodLevel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let count = self
            .counts
            .iter()
            .find(|(l, _)| *l == level)
            .map_or(0, |(_, c)| *c);

        count as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mood: MoodLevel, offset: Duration) -> MoodEntry {
        MoodEntry {
            mood,
            timestamp: Local::now() - offset,
        }
    }

    #[test]
    fn test_category_tags_are_unique() {
        let mut tags: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), Category::ALL.len());
    }

    #[test]
    fn test_mood_level_round_trip() {
        for level in MoodLevel::ALL {
            let parsed: MoodLevel = level.as_str().parse().expect("tag should parse");
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_summary_excludes_old_entries() {
        let now = Local::now();
        let entries = vec![
            entry(MoodLevel::Good, Duration::days(1)),
            entry(MoodLevel::Bad, Duration::days(8)),
        ];

        let summary = MoodSummary::compute(&entries, now, 7);
        assert_eq!(summary.total, 1);
        assert!((summary.percentage(MoodLevel::Good) - 100.0).abs() < f64::EPSILON);
        assert!(summary.percentage(MoodLevel::Bad).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_empty_window() {
        let summary = MoodSummary::compute(&[], Local::now(), 7);
        assert_eq!(summary.total, 0);
        assert!(summary.percentage(MoodLevel::Great).abs() < f64::EPSILON);
    }
}
