//! Categorization contract tests: crisis dominance, rule priority, and
//! fallback behavior.

use mindhelper::engine::{MessageCategorizer, CRISIS_KEYWORDS};
use mindhelper::models::Category;
use proptest::prelude::*;

fn categorizer() -> MessageCategorizer {
    MessageCategorizer::new().expect("rule table should compile")
}

#[test]
fn test_crisis_keywords_force_suicidal() {
    let c = categorizer();
    for keyword in CRISIS_KEYWORDS {
        assert_eq!(c.categorize(keyword), Category::Suicidal, "keyword: {keyword}");
        // Case-insensitive
        assert_eq!(
            c.categorize(&keyword.to_uppercase()),
            Category::Suicidal,
            "keyword: {keyword}"
        );
    }
}

#[test]
fn test_crisis_dominates_cooccurring_keywords() {
    let c = categorizer();
    // greeting + crisis
    assert_eq!(c.categorize("hello, I want to die"), Category::Suicidal);
    // positive mood + crisis
    assert_eq!(
        c.categorize("things were good but now I want to end my life"),
        Category::Suicidal
    );
    // gratitude + crisis
    assert_eq!(
        c.categorize("thank you but I might hurt myself"),
        Category::Suicidal
    );
}

#[test]
fn test_rule_order_dominance() {
    let c = categorizer();
    assert_eq!(c.categorize("I feel sad and anxious"), Category::MoodNegative);
    // anxiety precedes stress
    assert_eq!(c.categorize("anxious and stressed"), Category::Anxiety);
    // sleep precedes gratitude
    assert_eq!(c.categorize("thankful for my insomnia dream journal"), Category::Sleep);
}

#[test]
fn test_greeting_detection() {
    let c = categorizer();
    assert_eq!(c.categorize("hello, how are things"), Category::Greeting);
    assert_eq!(c.categorize("hey"), Category::Greeting);
    assert_eq!(c.categorize("Greetings friend"), Category::Greeting);
}

#[test]
fn test_question_requires_literal_question_mark() {
    let c = categorizer();
    assert_eq!(c.categorize("what is CBT?"), Category::GeneralQuestion);
    assert_eq!(c.categorize("what is CBT"), Category::Unknown);
}

#[test]
fn test_unknown_fallback() {
    let c = categorizer();
    assert_eq!(c.categorize("purple elephants dance"), Category::Unknown);
}

#[test]
fn test_category_samples() {
    let c = categorizer();
    assert_eq!(c.categorize("I am so happy today"), Category::MoodPositive);
    assert_eq!(c.categorize("full of worry lately"), Category::Anxiety);
    assert_eq!(c.categorize("I always mess this up"), Category::ThoughtDistortion);
    assert_eq!(c.categorize("I feel empty inside"), Category::Depression);
    assert_eq!(c.categorize("under a lot of pressure at work"), Category::Stress);
    assert_eq!(c.categorize("another nightmare again last night"), Category::Sleep);
    assert_eq!(c.categorize("thank you for listening"), Category::Gratitude);
    assert_eq!(c.categorize("I feel unsafe at home"), Category::Abuse);
    assert_eq!(c.categorize("struggling with alcohol"), Category::Substance);
}

proptest! {
    // Categorization is a pure function of the input text
    #[test]
    fn prop_categorize_is_deterministic(text in any::<String>()) {
        let c = categorizer();
        prop_assert_eq!(c.categorize(&text), c.categorize(&text));
    }

    // A crisis keyword dominates regardless of surrounding text
    #[test]
    fn prop_crisis_dominates(prefix in "[a-z ]{0,40}", suffix in "[a-z ]{0,40}") {
        let c = categorizer();
        let text = format!("{prefix} kill myself {suffix}");
        prop_assert_eq!(c.categorize(&text), Category::Suicidal);
    }
}
