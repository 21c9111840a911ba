//! MindHelper - Supportive Conversation Core
//!
//! A Rust library implementing a deterministic supportive-conversation
//! assistant: rule-based message categorization with crisis escalation,
//! template-based reply selection, and append-only journals for chat
//! history, mood tracking, and CBT thought records.
//!
//! # Features
//!
//! - Priority-ordered keyword categorization with a crisis override
//! - Fixed reply pools per category; the crisis reply is never randomized
//! - Append-only mood log with a rolling summary window
//! - Structured CBT thought records with mandatory-field validation
//! - Embedded persistence that survives restarts

/// Conversation orchestration over store and responder
pub mod chat;
/// Configuration management
pub mod config;
/// Message categorization engine
pub mod engine;
/// Error types
pub mod error;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Response composition and selection
pub mod responder;
/// Append-only journal storage
pub mod store;
/// Static reply-template store
pub mod templates;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use chat::ChatService;
pub use engine::MessageCategorizer;
pub use error::{MindHelperError, Result};
pub use models::{Category, ChatMessage, MoodEntry, MoodLevel, MoodSummary, NewThoughtRecord, Sender, ThoughtRecord};
pub use responder::Responder;
pub use store::JournalStore;
pub use templates::ResponseTemplates;
