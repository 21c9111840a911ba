//! Message categorization engine
//!
//! Maps free-text user input to exactly one [`Category`] through two stages:
//! a crisis check with absolute priority, then a fixed, ordered list of
//! keyword rules where the first match wins. Categorization is a pure
//! function of the input text; no state is carried between calls.
//!
//! Matching is deliberately substring-based rather than tokenized, so a
//! keyword triggers its category even mid-word. This coarseness is part of
//! the behavioral contract and must not be "fixed" to word-boundary
//! matching without revisiting the reply-template mapping.

use anyhow::Result;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::Category;

/// Substrings whose presence forces the `Suicidal` category.
///
/// Plain containment, not word-boundary aware; checked before any other rule.
pub const CRISIS_KEYWORDS: [&str; 7] = [
    "suicide",
    "kill myself",
    "end my life",
    "don't want to live",
    "want to die",
    "harm myself",
    "hurt myself",
];

/// One entry in the priority-ordered rule list
#[derive(Debug)]
pub struct CategoryRule {
    /// Category assigned when the pattern matches
    pub category: Category,
    pattern: Regex,
}

impl CategoryRule {
    fn new(category: Category, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            anyhow::anyhow!("Failed to compile pattern for category {category}: {e}")
        })?;
        Ok(Self { category, pattern })
    }

    /// True when this rule's pattern matches the (normalized) text
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Rule-based message categorizer.
///
/// Rule order is a priority ranking: a message matching several rules is
/// assigned to the earliest one. The list is data, not control flow, so the
/// ordering contract can be inspected and tested directly via [`rules`].
///
/// [`rules`]: MessageCategorizer::rules
pub struct MessageCategorizer {
    rules: Vec<CategoryRule>,
}

impl MessageCategorizer {
    /// Create a categorizer with the fixed rule set.
    ///
    /// Fails only if a rule pattern does not compile, which would be a
    /// defect in the rule table itself.
    pub fn new() -> Result<Self> {
        let rules = vec![
            // Greeting is the only start-anchored rule; everything below
            // matches anywhere in the message.
            CategoryRule::new(Category::Greeting, r"^(hi|hello|hey|greetings)")?,
            CategoryRule::new(
                Category::MoodPositive,
                r"happy|good|great|excellent|amazing|wonderful|fantastic|glad|positive",
            )?,
            CategoryRule::new(
                Category::MoodNegative,
                r"sad|down|unhappy|depressed|awful|terrible|hopeless|bad|miserable|low",
            )?,
            CategoryRule::new(
                Category::Anxiety,
                r"anxiety|anxious|nervous|worry|panic|phobia|scared|frightened|fear",
            )?,
            CategoryRule::new(
                Category::Depression,
                r"depressed|depression|hopeless|empty|numb|pointless|worthless",
            )?,
            CategoryRule::new(
                Category::Stress,
                r"stress|stressed|overwhelmed|pressure|burden|burnout",
            )?,
            CategoryRule::new(
                Category::Sleep,
                r"sleep|insomnia|tired|fatigue|exhausted|rest|dream|nightmare",
            )?,
            CategoryRule::new(Category::Gratitude, r"thank|grateful|appreciate|gratitude")?,
            CategoryRule::new(
                Category::ThoughtDistortion,
                r"always|never|everyone|nobody|everything|nothing|should|must|can't|catastrophe",
            )?,
            CategoryRule::new(
                Category::Abuse,
                r"abuse|hurt|hit|violence|threat|threaten|unsafe",
            )?,
            CategoryRule::new(
                Category::Substance,
                r"alcohol|drug|substance|addiction|hooked|withdrawal",
            )?,
            CategoryRule::new(Category::GeneralQuestion, r"\?")?,
        ];

        Ok(Self { rules })
    }

    /// Normalize input: NFC, then lower case.
    ///
    /// No punctuation or whitespace stripping; the crisis keywords and rule
    /// patterns match against the text as written.
    #[must_use]
    pub fn normalize(text: &str) -> String {
        text.nfc().collect::<String>().to_lowercase()
    }

    /// True if the text contains any crisis keyword (case-insensitive)
    #[must_use]
    pub fn detect_crisis(&self, text: &str) -> bool {
        let normalized = Self::normalize(text);
        Self::crisis_in_normalized(&normalized)
    }

    fn crisis_in_normalized(normalized: &str) -> bool {
        CRISIS_KEYWORDS
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }

    /// Assign exactly one category to the input text.
    ///
    /// Crisis detection short-circuits everything else; the remaining rules
    /// are evaluated in declared order and the first match wins. Inputs
    /// matching nothing fall back to `Unknown`, so this function is total.
    #[must_use]
    pub fn categorize(&self, text: &str) -> Category {
        let normalized = Self::normalize(text);

        if Self::crisis_in_normalized(&normalized) {
            return Category::Suicidal;
        }

        for rule in &self.rules {
            if rule.matches(&normalized) {
                return rule.category;
            }
        }

        Category::Unknown
    }

    /// The non-crisis rules in priority order
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}
