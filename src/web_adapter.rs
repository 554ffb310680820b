//! JSON shaping for the browser client.
//!
//! The web frontend consumes exercise and answer payloads in a fixed shape;
//! this module maps engine types onto it. Answer keys are stripped from
//! outgoing exercises — checking stays server-side.

use serde_json::{json, Value};

use crate::practice_engine::models::{Exercise, Subject};
use crate::practice_engine::evaluator::{Evaluation, Verdict};

fn subject_str(subject: Subject) -> &'static str {
    match subject {
        Subject::Math => "math",
        Subject::English => "english",
    }
}

/// Public view of an exercise: prompt and display text only, no answer key.
pub fn to_client_exercise(exercise: &Exercise) -> Value {
    json!({
        "id": exercise.exercise_id,
        "type": exercise.topic.slug(),
        "subject": subject_str(exercise.subject()),
        "question": exercise.question,
        "display": exercise.display,
        "difficulty": exercise.difficulty.slug(),
    })
}

/// Answer-submission response. The follow-up exercise is keyed
/// `next_problem` for math and `next_exercise` for English, matching what
/// the client expects; no follow-up is sent for an unrecognized answer since
/// the learner is re-asked the same exercise.
pub fn to_answer_response(
    evaluation: &Evaluation,
    subject: Subject,
    next: Option<&Exercise>,
) -> Value {
    let mut response = json!({
        "correct": evaluation.verdict.is_correct(),
        "recognized": evaluation.verdict != Verdict::Unrecognized,
        "feedback": evaluation.feedback,
    });
    if let Some(next) = next {
        let key = match subject {
            Subject::Math => "next_problem",
            Subject::English => "next_exercise",
        };
        response[key] = to_client_exercise(next);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::{generate_exercise, ExerciseRequest, ExerciseTopic};

    #[test]
    fn client_exercise_never_leaks_the_answer() {
        let mut req = ExerciseRequest::new(ExerciseTopic::Addition);
        req.rng_seed = Some(42);
        let e = generate_exercise(req);
        let v = to_client_exercise(&e);
        assert!(v.get("answer").is_none());
        assert_eq!(v["type"], "addition");
        assert_eq!(v["subject"], "math");
        assert_eq!(v["id"], e.exercise_id);
    }

    #[test]
    fn unrecognized_response_carries_no_follow_up() {
        let mut req = ExerciseRequest::new(ExerciseTopic::Addition);
        req.rng_seed = Some(1);
        let e = generate_exercise(req);
        let eval = crate::practice_engine::evaluate(&e, "no clue");
        let v = to_answer_response(&eval, Subject::Math, None);
        assert_eq!(v["recognized"], false);
        assert_eq!(v["correct"], false);
        assert!(v.get("next_problem").is_none());
    }
}
