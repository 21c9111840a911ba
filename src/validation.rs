use anyhow::{anyhow, Result};

use crate::models::NewThoughtRecord;

/// Maximum length accepted for any free-text field
pub const MAX_TEXT_LENGTH: usize = 2000;

/// Validation utilities for input sanitization and edge case handling
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate a chat message before it enters the conversation.
    ///
    /// Arbitrary content is accepted; only empty input and extreme lengths
    /// are rejected. Categorization itself never rejects anything.
    pub fn validate_chat_message(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(anyhow!("Message cannot be empty"));
        }

        if text.len() > MAX_TEXT_LENGTH {
            return Err(anyhow!(
                "Message too long (max {MAX_TEXT_LENGTH} characters)"
            ));
        }

        if text.contains('\0') {
            return Err(anyhow!("Message contains invalid characters"));
        }

        Ok(())
    }

    /// Validate a thought record before it is appended.
    ///
    /// All seven payload fields are mandatory; a single missing field
    /// rejects the whole record so nothing partial is ever stored.
    pub fn validate_thought_record(record: &NewThoughtRecord) -> Result<()> {
        let text_fields = [
            ("situation", &record.situation),
            ("automatic thought", &record.automatic_thought),
            ("emotion", &record.emotion),
            ("evidence", &record.evidence),
            ("alternative thought", &record.alternative_thought),
            ("new emotion", &record.new_emotion),
        ];

        for (name, value) in text_fields {
            if value.trim().is_empty() {
                return Err(anyhow!("Thought record field '{name}' cannot be empty"));
            }

            if value.len() > MAX_TEXT_LENGTH {
                return Err(anyhow!(
                    "Thought record field '{name}' too long (max {MAX_TEXT_LENGTH} characters)"
                ));
            }
        }

        Self::validate_intensity(record.intensity)?;
        Self::validate_intensity(record.new_intensity)?;

        Ok(())
    }

    /// Validate an emotional intensity rating
    pub fn validate_intensity(intensity: u8) -> Result<()> {
        if !(1..=10).contains(&intensity) {
            return Err(anyhow!("Intensity must be between 1 and 10, got {intensity}"));
        }

        Ok(())
    }

    /// Validate a mood summary window in days
    pub fn validate_summary_window(days: i64) -> Result<()> {
        if days < 1 {
            return Err(anyhow!("Summary window must be at least 1 day"));
        }

        if days > 365 {
            return Err(anyhow!("Summary window too large (max 365 days)"));
        }

        Ok(())
    }

    /// Sanitize text input
    #[must_use]
    pub fn sanitize_text(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect::<String>()
            .trim()
            .to_string()
    }
}
