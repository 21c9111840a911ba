//! Response selection tests: pool membership, crisis invariance, and
//! reproducible selection with a seeded generator.

use mindhelper::models::Category;
use mindhelper::templates::{ResponseTemplates, CRISIS_RESOURCES};
use mindhelper::Responder;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_responder_builds() {
    assert!(Responder::new().is_ok());
}

#[test]
fn test_replies_come_from_the_matching_pool() {
    let responder = Responder::new().expect("responder should build");
    let templates = ResponseTemplates::new();
    let mut rng = StdRng::seed_from_u64(99);

    let cases = [
        ("hello there", Category::Greeting),
        ("I am so happy today", Category::MoodPositive),
        ("feeling really sad", Category::MoodNegative),
        ("so anxious right now", Category::Anxiety),
        ("under constant pressure", Category::Stress),
        ("can I ask you something?", Category::GeneralQuestion),
        ("purple elephants dance", Category::Unknown),
    ];

    for (text, category) in cases {
        assert_eq!(responder.categorize(text), category, "input: {text}");
        let pool = templates.pool(category).expect("pool should exist");
        for _ in 0..10 {
            let reply = responder.respond_with(text, &mut rng);
            assert!(pool.contains(&reply), "reply for {text} not in pool");
        }
    }
}

#[test]
fn test_crisis_reply_is_exact_and_never_varies() {
    let responder = Responder::new().expect("responder should build");
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..25 {
        assert_eq!(
            responder.respond_with("I don't want to live", &mut rng),
            CRISIS_RESOURCES
        );
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let responder = Responder::new().expect("responder should build");

    let mut first_rng = StdRng::seed_from_u64(1234);
    let mut second_rng = StdRng::seed_from_u64(1234);

    for text in ["hello", "feeling low", "thanks a lot", "what now?"] {
        assert_eq!(
            responder.respond_with(text, &mut first_rng),
            responder.respond_with(text, &mut second_rng)
        );
    }
}

#[test]
fn test_thread_rng_path_also_stays_in_pool() {
    let responder = Responder::new().expect("responder should build");
    let templates = ResponseTemplates::new();
    let pool = templates
        .pool(Category::Gratitude)
        .expect("gratitude pool should exist");

    for _ in 0..10 {
        let reply = responder.respond("thank you");
        assert!(pool.contains(&reply));
    }
}
