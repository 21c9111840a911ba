//! Static reply-template store
//!
//! Maps each [`Category`] to its pool of candidate replies. The store is
//! built once at startup and never mutated. Every non-crisis category holds
//! two or three supportive framings; the `Suicidal` category holds exactly
//! one fixed safety-resource block so that crisis messaging is never left
//! to randomness.

use std::collections::HashMap;

use crate::error::{MindHelperError, Result};
use crate::models::Category;

/// Fixed safety-resource reply for crisis messages.
///
/// Must never be randomized, abbreviated, or reworded at runtime.
pub const CRISIS_RESOURCES: &str = "If you're having thoughts of suicide, please reach out for immediate help:\n\
\u{2022} National Suicide Prevention Lifeline: 988 or 1-800-273-8255\n\
\u{2022} Crisis Text Line: Text HOME to 741741\n\
\u{2022} 911 or go to your nearest emergency room\n\
Remember, you don't have to face these feelings alone. Professional help is available, and they can provide the support you need right now.";

/// Generic supportive fallback, used only when reply composition itself
/// fails. The user must never see a blank reply or a technical error.
pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble processing that right now. Could you try again or phrase it differently?";

/// Opening message seeded into an empty conversation
pub const WELCOME_MESSAGE: &str =
    "Hello, I'm MindHelper, your supportive companion. How are you feeling today?";

/// Read-only mapping from category to reply pool
pub struct ResponseTemplates {
    pools: HashMap<Category, Vec<String>>,
}

impl ResponseTemplates {
    /// Build the full template table
    #[must_use]
    pub fn new() -> Self {
        let mut pools: HashMap<Category, Vec<String>> = HashMap::new();

        let mut add = |category: Category, replies: &[&str]| {
            pools.insert(category, replies.iter().map(ToString::to_string).collect());
        };

        add(Category::Greeting, &[
            "Hello! It's nice to connect with you. How are you feeling today?",
            "Hi there! I'm here to support you. How has your day been going?",
            "Hello! I'm your supportive companion. What brings you here today?",
        ]);

        add(Category::MoodPositive, &[
            "I'm glad to hear you're feeling positive! What's contributed to your good mood?",
            "That's wonderful to hear. Acknowledging positive emotions is just as important as addressing challenges. What's been going well for you?",
            "It's great that you're feeling good. Would you like to explore ways to maintain this positive state?",
        ]);

        add(Category::MoodNegative, &[
            "I'm sorry to hear you're feeling down. Would you like to talk about what might be contributing to these feelings?",
            "It sounds like you're going through a difficult time. Sometimes identifying specific thoughts behind these feelings can help us address them. Would you like to try that?",
            "When we're feeling low, our thoughts often become more negative. Could you share what's been going through your mind recently?",
        ]);

        add(Category::Anxiety, &[
            "Anxiety can be really challenging. One technique that might help is deep breathing. Would you like to try a quick breathing exercise together?",
            "When anxiety takes hold, our thoughts often race to worst-case scenarios. Could you share what specifically is causing you worry right now?",
            "Anxiety often involves physical sensations as well as worried thoughts. Are you noticing any physical symptoms like tension or rapid heartbeat?",
        ]);

        add(Category::Depression, &[
            "Depression can make even small tasks feel overwhelming. Is there one small, manageable activity you might try today?",
            "When we're depressed, we often lose interest in things we used to enjoy. Have you noticed this happening for you?",
            "Depression often involves negative thoughts about yourself, the world, or the future. Have you noticed any patterns in your thoughts lately?",
        ]);

        add(Category::Stress, &[
            "Stress can build up without us realizing it. What are some signs that tell you you're feeling stressed?",
            "Managing stress often starts with identifying its sources. What situations or responsibilities feel most overwhelming right now?",
            "Taking breaks is essential when dealing with stress. Is there a small way you could build in a moment of calm today?",
        ]);

        add(Category::Sleep, &[
            "Sleep troubles can significantly impact our mental well-being. Have you noticed any patterns with your sleep difficulties?",
            "Creating a consistent sleep routine can help. What does your current bedtime routine look like?",
            "Sometimes racing thoughts keep us awake. Would you like to explore some relaxation techniques that might help with falling asleep?",
        ]);

        add(Category::GeneralQuestion, &[
            "That's a thoughtful question. While I can offer CBT-based perspectives, it's important to remember that I'm designed to support, not replace professional guidance.",
            "I appreciate your curiosity. I can share some CBT perspectives on this, though remember that everyone's experience is unique.",
            "Great question. I can offer some thoughts based on CBT principles, which focus on how our thoughts, feelings, and behaviors connect.",
        ]);

        add(Category::Gratitude, &[
            "You're very welcome. I'm here to support you whenever you need it.",
            "I'm glad our conversation has been helpful. Expressing gratitude is actually a positive practice for mental well-being.",
            "You're welcome. Recognizing moments of appreciation, even small ones, can be a powerful tool for shifting perspective.",
        ]);

        add(Category::ThoughtDistortion, &[
            "I noticed some language that might reflect all-or-nothing thinking. In CBT, we try to find the middle ground between extremes. How might a more balanced perspective look?",
            "Words like 'always' and 'never' can trap us in rigid thinking patterns. Could there be exceptions to this situation?",
            "That sounds like it might involve some 'should' statements, which can create unrealistic expectations. What would happen if you replaced 'should' with 'could' or 'would like to'?",
        ]);

        // Singleton by design: the crisis reply is always the same text
        add(Category::Suicidal, &[CRISIS_RESOURCES]);

        add(Category::Abuse, &[
            "I'm concerned about what you've shared. Your safety is important. If you're in immediate danger, please call emergency services at 911.",
            "Thank you for trusting me with this information. No one deserves to experience abuse. The National Domestic Violence Hotline (1-800-799-7233) has trained advocates available 24/7.",
            "What you're describing sounds very difficult. It's important that you know there are resources available to help. Would you like me to share some options for support?",
        ]);

        add(Category::Substance, &[
            "Struggles with substances can be complex. The SAMHSA National Helpline (1-800-662-4357) offers free, confidential support for individuals and families facing substance use disorders.",
            "Thank you for sharing this. Many people find that talking to a professional specializing in substance use can provide valuable support. Would you like information about resources?",
            "That sounds challenging. Recovery often involves both addressing the substance use itself and the underlying feelings or situations connected to it. Have you been able to identify any patterns or triggers?",
        ]);

        add(Category::Unknown, &[
            "Thank you for sharing. Could you tell me more about how this has been affecting your thoughts and feelings?",
            "I appreciate you opening up. How have these experiences been impacting your day-to-day life?",
            "I'm here to support you. Would it help to explore some coping strategies related to what you're experiencing?",
        ]);

        Self { pools }
    }

    /// The reply pool for a category, or `None` if unmapped
    #[must_use]
    pub fn pool(&self, category: Category) -> Option<&[String]> {
        self.pools.get(&category).map(Vec::as_slice)
    }

    /// Verify that every category has a non-empty pool.
    ///
    /// Called once at responder construction; a failure here is a defect in
    /// the template table, not a runtime condition.
    pub fn verify_complete(&self) -> Result<()> {
        for category in Category::ALL {
            match self.pools.get(&category) {
                Some(pool) if !pool.is_empty() => {}
                _ => return Err(MindHelperError::MissingTemplates(category)),
            }
        }
        Ok(())
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_pool() {
        let templates = ResponseTemplates::new();
        assert!(templates.verify_complete().is_ok());
    }

    #[test]
    fn test_non_crisis_pools_offer_variety() {
        let templates = ResponseTemplates::new();
        for category in Category::ALL {
            let pool = templates.pool(category).expect("pool should exist");
            if category == Category::Suicidal {
                assert_eq!(pool.len(), 1);
            } else {
                assert!((2..=3).contains(&pool.len()), "pool size for {category}");
            }
        }
    }

    #[test]
    fn test_crisis_pool_is_the_fixed_resource_block() {
        let templates = ResponseTemplates::new();
        let pool = templates.pool(Category::Suicidal).expect("pool should exist");
        assert_eq!(pool, [CRISIS_RESOURCES.to_string()]);
        assert!(CRISIS_RESOURCES.contains("988"));
        assert!(CRISIS_RESOURCES.contains("741741"));
        assert!(CRISIS_RESOURCES.contains("911"));
    }
}
