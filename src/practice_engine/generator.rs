use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::practice_engine::{
    models::{Exercise, ExerciseRequest, ExerciseTopic, Subject, TopicSelector},
    topics,
};

/// Generate a unique exercise ID from topic + rng.
fn make_exercise_id(topic: ExerciseTopic, rng: &mut impl RngCore) -> String {
    let prefix = match topic {
        ExerciseTopic::Addition => "AD",
        ExerciseTopic::Subtraction => "SU",
        ExerciseTopic::Multiplication => "MU",
        ExerciseTopic::Division => "DV",
        ExerciseTopic::Spelling => "SP",
        ExerciseTopic::Vocabulary => "VO",
        ExerciseTopic::Grammar => "GR",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Resolve a selector to a concrete topic, picking uniformly when the
/// selector covers more than one.
fn pick_topic(selector: TopicSelector, rng: &mut impl Rng) -> ExerciseTopic {
    let candidates: &[ExerciseTopic] = match selector {
        TopicSelector::Topic(t) => return t,
        TopicSelector::Subject(Subject::Math) => &[
            ExerciseTopic::Addition,
            ExerciseTopic::Subtraction,
            ExerciseTopic::Multiplication,
            ExerciseTopic::Division,
        ],
        TopicSelector::Subject(Subject::English) => &[
            ExerciseTopic::Spelling,
            ExerciseTopic::Vocabulary,
            ExerciseTopic::Grammar,
        ],
        TopicSelector::Any => &ExerciseTopic::ALL,
    };
    candidates[rng.gen_range(0..candidates.len())]
}

/// Core dispatch: resolves the topic and routes to its builder.
pub fn generate_exercise(request: ExerciseRequest) -> Exercise {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let topic = pick_topic(request.selector, &mut rng);
    let exercise_id = make_exercise_id(topic, &mut rng);

    let exercise = match topic {
        ExerciseTopic::Addition => {
            topics::arithmetic::addition(&mut rng, request.difficulty, exercise_id)
        }
        ExerciseTopic::Subtraction => {
            topics::arithmetic::subtraction(&mut rng, request.difficulty, exercise_id)
        }
        ExerciseTopic::Multiplication => {
            topics::arithmetic::multiplication(&mut rng, request.difficulty, exercise_id)
        }
        ExerciseTopic::Division => {
            topics::arithmetic::division(&mut rng, request.difficulty, exercise_id)
        }
        ExerciseTopic::Spelling => topics::spelling::generate(&mut rng, exercise_id),
        ExerciseTopic::Vocabulary => topics::vocabulary::generate(&mut rng, exercise_id),
        ExerciseTopic::Grammar => topics::grammar::generate(&mut rng, exercise_id),
    };

    tracing::debug!(
        exercise_id = %exercise.exercise_id,
        topic = %exercise.topic,
        "generated exercise"
    );
    exercise
}
