//! Tour of all 7 practice topics.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows how `edu_drill_gen` works end to end:
//!
//! 1. **Minimal API** — `ExerciseRequest::new(topic_or_subject)` with
//!    defaults (Easy, entropy seed).
//! 2. **All 7 topics** — one exercise per topic with fixed seeds, so the
//!    output is deterministic and reproducible.
//! 3. **Difficulty comparison** — the same addition seed at Easy vs Medium,
//!    showing how the operand bands widen while the format stays identical.

use edu_drill_gen::{
    generate_exercise, AnswerKey, DifficultyLevel, Exercise, ExerciseRequest, ExerciseTopic,
    Subject,
};

/// Generate and pretty-print one exercise, answer key included.
fn print_exercise(topic: ExerciseTopic, seed: u64, difficulty: DifficultyLevel) {
    let exercise = generate_exercise(ExerciseRequest {
        selector: topic.into(),
        difficulty,
        rng_seed: Some(seed),
    });
    dump(&exercise);
}

fn dump(exercise: &Exercise) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  [{} — {}]  Difficulty: {}  ID: {}",
        exercise.topic,
        exercise.subject(),
        exercise.difficulty,
        exercise.exercise_id
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Display: {}", exercise.display);
    println!("  Q: {}", exercise.question);
    match &exercise.answer {
        AnswerKey::Numeric { value } => println!("  A: {value}"),
        AnswerKey::Textual { accepted, correct_answer } => {
            println!("  Accepted: {}", accepted.join(" | "));
            println!("  Readback: {correct_answer}");
        }
    }
    if let Some(explanation) = &exercise.explanation {
        println!("  Why: {explanation}");
    }
    println!();
}

fn main() {
    // ── Minimal API ──────────────────────────────────────────────────────────
    println!();
    println!("══ Minimal API: ExerciseRequest::new() ══");
    println!();
    let e1 = generate_exercise(ExerciseRequest::new(ExerciseTopic::Addition));
    println!("  Specific topic:   {}  ID: {}", e1.topic, e1.exercise_id);
    let e2 = generate_exercise(ExerciseRequest::new(Subject::English));
    println!("  Random English:   {}  ID: {}", e2.topic, e2.exercise_id);
    println!();

    // ── All 7 topics ─────────────────────────────────────────────────────────
    println!("══ All 7 topics (Easy, fixed seeds) ══");
    println!();
    let topics = [
        (ExerciseTopic::Addition, 1001u64),
        (ExerciseTopic::Subtraction, 2002),
        (ExerciseTopic::Multiplication, 3003),
        (ExerciseTopic::Division, 4004),
        (ExerciseTopic::Spelling, 5005),
        (ExerciseTopic::Vocabulary, 6006),
        (ExerciseTopic::Grammar, 7007),
    ];
    for (topic, seed) in topics {
        print_exercise(topic, seed, DifficultyLevel::Easy);
    }

    // ── Difficulty comparison ────────────────────────────────────────────────
    // Same topic, different band: operands widen, everything else identical.
    println!("══ Difficulty comparison: Addition seed=1001 ══");
    println!();
    print_exercise(ExerciseTopic::Addition, 1001, DifficultyLevel::Easy);
    print_exercise(ExerciseTopic::Addition, 1001, DifficultyLevel::Medium);
}
