//! Comprehensive unit tests for validation.rs module

use mindhelper::models::NewThoughtRecord;
use mindhelper::validation::{InputValidator, MAX_TEXT_LENGTH};

fn complete_record() -> NewThoughtRecord {
    NewThoughtRecord {
        situation: "Argument with a friend".to_string(),
        automatic_thought: "They must hate me now".to_string(),
        emotion: "worried".to_string(),
        intensity: 6,
        evidence: "We have disagreed before and stayed friends".to_string(),
        alternative_thought: "One argument does not end a friendship".to_string(),
        new_emotion: "hopeful".to_string(),
        new_intensity: 2,
    }
}

#[test]
fn test_validate_chat_message_valid() {
    assert!(InputValidator::validate_chat_message("I had a rough day").is_ok());
}

#[test]
fn test_validate_chat_message_empty() {
    assert!(InputValidator::validate_chat_message("").is_err());
}

#[test]
fn test_validate_chat_message_whitespace_only() {
    assert!(InputValidator::validate_chat_message("   ").is_err());
}

#[test]
fn test_validate_chat_message_too_long() {
    let long_message = "a".repeat(MAX_TEXT_LENGTH + 1);
    assert!(InputValidator::validate_chat_message(&long_message).is_err());
}

#[test]
fn test_validate_chat_message_exactly_max_length() {
    let message = "a".repeat(MAX_TEXT_LENGTH);
    assert!(InputValidator::validate_chat_message(&message).is_ok());
}

#[test]
fn test_validate_chat_message_with_null_byte() {
    assert!(InputValidator::validate_chat_message("hello\0world").is_err());
}

#[test]
fn test_validate_thought_record_complete() {
    assert!(InputValidator::validate_thought_record(&complete_record()).is_ok());
}

#[test]
fn test_validate_thought_record_blank_situation() {
    let record = NewThoughtRecord {
        situation: "  ".to_string(),
        ..complete_record()
    };
    assert!(InputValidator::validate_thought_record(&record).is_err());
}

#[test]
fn test_validate_thought_record_blank_evidence() {
    let record = NewThoughtRecord {
        evidence: String::new(),
        ..complete_record()
    };
    assert!(InputValidator::validate_thought_record(&record).is_err());
}

#[test]
fn test_validate_thought_record_oversized_field() {
    let record = NewThoughtRecord {
        alternative_thought: "x".repeat(MAX_TEXT_LENGTH + 1),
        ..complete_record()
    };
    assert!(InputValidator::validate_thought_record(&record).is_err());
}

#[test]
fn test_validate_intensity_bounds() {
    assert!(InputValidator::validate_intensity(0).is_err());
    assert!(InputValidator::validate_intensity(1).is_ok());
    assert!(InputValidator::validate_intensity(10).is_ok());
    assert!(InputValidator::validate_intensity(11).is_err());
}

#[test]
fn test_validate_thought_record_intensity_out_of_range() {
    let record = NewThoughtRecord {
        intensity: 11,
        ..complete_record()
    };
    assert!(InputValidator::validate_thought_record(&record).is_err());

    let record = NewThoughtRecord {
        new_intensity: 0,
        ..complete_record()
    };
    assert!(InputValidator::validate_thought_record(&record).is_err());
}

#[test]
fn test_validate_summary_window_bounds() {
    assert!(InputValidator::validate_summary_window(0).is_err());
    assert!(InputValidator::validate_summary_window(1).is_ok());
    assert!(InputValidator::validate_summary_window(7).is_ok());
    assert!(InputValidator::validate_summary_window(365).is_ok());
    assert!(InputValidator::validate_summary_window(366).is_err());
}

#[test]
fn test_sanitize_text_strips_control_characters() {
    let sanitized = InputValidator::sanitize_text("hello\u{1}\u{2} world\u{7f}");
    assert_eq!(sanitized, "hello world");
}

#[test]
fn test_sanitize_text_keeps_newlines_and_tabs() {
    let sanitized = InputValidator::sanitize_text("line one\nline two\tend");
    assert_eq!(sanitized, "line one\nline two\tend");
}

#[test]
fn test_sanitize_text_trims_whitespace() {
    assert_eq!(InputValidator::sanitize_text("  hello  "), "hello");
}
