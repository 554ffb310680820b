//! Simulated voice practice session.
//!
//! Run with: `cargo run --example voice_session`
//!
//! Drives a [`PracticeSession`] from a [`ScriptedTranscripts`] source — the
//! same boundary a real speech recognizer would sit behind — and prints the
//! verdict, feedback, and score/streak after every answer. The script
//! includes a mumbled (unrecognized) answer to show the no-penalty re-ask.

use edu_drill_gen::{
    generate_exercise, ExerciseRequest, ExerciseTopic, PracticeSession, ScriptedTranscripts,
    TranscriptSource, Verdict,
};

fn main() {
    let mut session = PracticeSession::new();

    // Seeded exercises so the scripted answers line up deterministically.
    let plan: [(ExerciseTopic, u64); 3] = [
        (ExerciseTopic::Addition, 42),
        (ExerciseTopic::Spelling, 42),
        (ExerciseTopic::Vocabulary, 42),
    ];

    for (topic, seed) in plan {
        let exercise = generate_exercise(ExerciseRequest {
            selector: topic.into(),
            difficulty: edu_drill_gen::DifficultyLevel::Easy,
            rng_seed: Some(seed),
        });
        println!("Q: {}", exercise.question);

        // Numeric exercises get a mumbled first attempt — standing in for a
        // learner who is re-asked without penalty and then gets it right.
        let attempts = match &exercise.answer {
            edu_drill_gen::AnswerKey::Numeric { value } => {
                vec!["uhm hold on".to_string(), format!("it is {value}")]
            }
            edu_drill_gen::AnswerKey::Textual { accepted, .. } => {
                vec![format!("i think it's {}", accepted[0])]
            }
        };
        let mut mic = ScriptedTranscripts::new(attempts);

        session.begin(exercise);
        while let Some(raw) = mic.next_transcript() {
            println!("  heard: {raw:?}");
            let eval = session.answer(&raw).expect("exercise pending");
            println!("  -> {:?}: {}", eval.verdict, eval.feedback);
            if eval.verdict != Verdict::Unrecognized {
                break;
            }
        }
        let state = session.state();
        println!("  score: {}  streak: {}", state.score, state.streak);
        println!();
    }
}
