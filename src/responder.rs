//! Response composition
//!
//! The [`Responder`] is the sole entry point for turning user text into a
//! reply: categorize, look up the category's reply pool, pick one candidate
//! at random. It is stateless between calls and safe to share across
//! threads; the randomness source is supplied per call so selection can be
//! made reproducible in tests.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;
use tracing::error;

use crate::engine::MessageCategorizer;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Category;
use crate::templates::{ResponseTemplates, FALLBACK_REPLY};

/// Composes categorizer, template store, and random selection
pub struct Responder {
    categorizer: MessageCategorizer,
    templates: ResponseTemplates,
    metrics: MetricsCollector,
}

impl Responder {
    /// Build a responder and verify the template table is complete.
    ///
    /// A missing or empty reply pool is a configuration defect and fails
    /// construction rather than surfacing later as a broken reply.
    pub fn new() -> Result<Self> {
        let categorizer = MessageCategorizer::new()?;
        let templates = ResponseTemplates::new();
        templates.verify_complete()?;

        Ok(Self {
            categorizer,
            templates,
            metrics: MetricsCollector::default(),
        })
    }

    /// Categorize without producing a reply
    #[must_use]
    pub fn categorize(&self, text: &str) -> Category {
        self.categorizer.categorize(text)
    }

    /// Produce a reply using the thread-local randomness source
    #[must_use]
    pub fn respond(&self, text: &str) -> String {
        self.respond_with(text, &mut rand::thread_rng())
    }

    /// Produce a reply, selecting from the category's pool with `rng`.
    ///
    /// Never fails and never returns an empty string: if the pool lookup
    /// fails (which `new` should have ruled out), the generic supportive
    /// fallback is returned instead.
    pub fn respond_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let start = Instant::now();
        let category = self.categorizer.categorize(text);
        self.metrics.record_categorization(category);

        let reply = match self.templates.pool(category).and_then(|p| p.choose(rng)) {
            Some(reply) => reply.clone(),
            None => {
                error!(category = %category, "no reply pool configured, using fallback");
                self.metrics.record_error("missing_templates", "respond");
                FALLBACK_REPLY.to_string()
            }
        };

        self.metrics.record_response(category, start.elapsed());
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::templates::CRISIS_RESOURCES;

    #[test]
    fn test_crisis_reply_is_verbatim_and_invariant() {
        let responder = Responder::new().expect("responder should build");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..5 {
            let reply = responder.respond_with("I want to die", &mut rng);
            assert_eq!(reply, CRISIS_RESOURCES);
        }
    }

    #[test]
    fn test_reply_is_drawn_from_the_category_pool() {
        let responder = Responder::new().expect("responder should build");
        let templates = ResponseTemplates::new();
        let mut rng = StdRng::seed_from_u64(42);

        let pool = templates
            .pool(Category::Greeting)
            .expect("greeting pool should exist");
        for _ in 0..20 {
            let reply = responder.respond_with("hello there", &mut rng);
            assert!(pool.contains(&reply));
        }
    }

    #[test]
    fn test_reply_is_never_empty() {
        let responder = Responder::new().expect("responder should build");
        let mut rng = StdRng::seed_from_u64(1);

        for text in ["", "   ", "purple elephants dance", "what is CBT?"] {
            assert!(!responder.respond_with(text, &mut rng).is_empty());
        }
    }
}
