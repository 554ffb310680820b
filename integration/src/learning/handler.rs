use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use edu_drill_gen::{
    evaluate, generate_exercise, to_answer_response, to_client_exercise, DifficultyLevel,
    Exercise, ExerciseRequest, ExerciseTopic, Subject, TopicSelector, Verdict,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared state: exercise cache + per-session progress, both in memory
// ---------------------------------------------------------------------------

const EXERCISE_CACHE_CAP: usize = 1000;

#[derive(Clone)]
pub struct AppState {
    pub exercises: Arc<Mutex<HashMap<String, Exercise>>>,
    pub progress: Arc<Mutex<HashMap<String, SessionProgress>>>,
}

pub fn new_state() -> AppState {
    AppState {
        exercises: Arc::new(Mutex::new(HashMap::new())),
        progress: Arc::new(Mutex::new(HashMap::new())),
    }
}

/// Per-session counters, keyed by the client-generated session id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionProgress {
    pub math_score: u32,
    pub math_streak: u32,
    pub english_score: u32,
    pub english_streak: u32,
    pub problems_solved: u32,
}

impl SessionProgress {
    fn apply(&mut self, subject: Subject, verdict: Verdict) {
        // Unrecognized answers are re-asked, not counted.
        if verdict == Verdict::Unrecognized {
            return;
        }
        let (score, streak) = match subject {
            Subject::Math => (&mut self.math_score, &mut self.math_streak),
            Subject::English => (&mut self.english_score, &mut self.english_streak),
        };
        if verdict.is_correct() {
            *score += 1;
            *streak += 1;
        } else {
            *streak = 0;
        }
        self.problems_solved += 1;
    }
}

// ---------------------------------------------------------------------------
// Query / body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ExerciseQuery {
    #[serde(rename = "type")]
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Deserialize)]
pub struct MathAnswerRequest {
    pub problem_id: String,
    /// Number or raw transcript string; the evaluator handles both.
    pub user_answer: Value,
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct EnglishAnswerRequest {
    pub exercise_id: String,
    pub user_answer: String,
    pub session_id: String,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(msg: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

fn not_found(msg: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": msg })))
}

// ---------------------------------------------------------------------------
// Topic / difficulty parsing
// ---------------------------------------------------------------------------

fn parse_selector(subject: Subject, topic: &Option<String>) -> Result<TopicSelector, ApiError> {
    match topic.as_deref() {
        None | Some("all") => Ok(TopicSelector::Subject(subject)),
        Some(slug) => {
            let t = ExerciseTopic::from_slug(slug)
                .filter(|t| t.subject() == subject)
                .ok_or_else(|| bad_request(format!("Unknown type: {slug}")))?;
            Ok(TopicSelector::Topic(t))
        }
    }
}

fn parse_difficulty(difficulty: &Option<String>) -> Result<DifficultyLevel, ApiError> {
    match difficulty.as_deref() {
        None => Ok(DifficultyLevel::Easy),
        Some(slug) => DifficultyLevel::from_slug(slug)
            .ok_or_else(|| bad_request(format!("Unknown difficulty: {slug}"))),
    }
}

// ---------------------------------------------------------------------------
// Exercise generation + caching
// ---------------------------------------------------------------------------

fn fresh_exercise(state: &AppState, selector: TopicSelector, difficulty: DifficultyLevel) -> Exercise {
    let exercise = generate_exercise(ExerciseRequest {
        selector,
        difficulty,
        rng_seed: None,
    });

    // Cache the full exercise for the answer endpoint.
    let mut map = state.exercises.lock().unwrap();
    // Evict an arbitrary entry once the cache hits its cap.
    if map.len() >= EXERCISE_CACHE_CAP {
        if let Some(first_key) = map.keys().next().cloned() {
            map.remove(&first_key);
        }
    }
    map.insert(exercise.exercise_id.clone(), exercise.clone());
    exercise
}

fn answer_for(
    state: &AppState,
    subject: Subject,
    exercise_id: &str,
    transcript: &str,
    session_id: &str,
) -> Result<Json<Value>, ApiError> {
    let exercise = {
        let map = state.exercises.lock().unwrap();
        map.get(exercise_id)
            .cloned()
            .ok_or_else(|| not_found("Exercise not found or expired"))?
    };

    let evaluation = evaluate(&exercise, transcript);

    {
        let mut progress = state.progress.lock().unwrap();
        progress
            .entry(session_id.to_string())
            .or_default()
            .apply(subject, evaluation.verdict);
    }

    // Unrecognized → re-ask the same exercise, no follow-up.
    let next = if evaluation.verdict == Verdict::Unrecognized {
        None
    } else {
        Some(fresh_exercise(
            state,
            TopicSelector::Topic(exercise.topic),
            exercise.difficulty,
        ))
    };

    Ok(Json(to_answer_response(&evaluation, subject, next.as_ref())))
}

// ---------------------------------------------------------------------------
// GET /api/math/problems?type=...&difficulty=...
// ---------------------------------------------------------------------------

pub async fn get_math_problem(
    State(state): State<AppState>,
    Query(params): Query<ExerciseQuery>,
) -> Result<Json<Value>, ApiError> {
    let selector = parse_selector(Subject::Math, &params.topic)?;
    let difficulty = parse_difficulty(&params.difficulty)?;
    let exercise = fresh_exercise(&state, selector, difficulty);
    Ok(Json(to_client_exercise(&exercise)))
}

// ---------------------------------------------------------------------------
// POST /api/math/answer   body: { problem_id, user_answer, session_id }
// ---------------------------------------------------------------------------

pub async fn submit_math_answer(
    State(state): State<AppState>,
    Json(body): Json<MathAnswerRequest>,
) -> Result<Json<Value>, ApiError> {
    // The client may send a bare number or the raw transcript.
    let transcript = match &body.user_answer {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Err(bad_request(format!("Unusable user_answer: {other}"))),
    };
    answer_for(&state, Subject::Math, &body.problem_id, &transcript, &body.session_id)
}

// ---------------------------------------------------------------------------
// GET /api/english/exercises?type=...
// ---------------------------------------------------------------------------

pub async fn get_english_exercise(
    State(state): State<AppState>,
    Query(params): Query<ExerciseQuery>,
) -> Result<Json<Value>, ApiError> {
    let selector = parse_selector(Subject::English, &params.topic)?;
    let difficulty = parse_difficulty(&params.difficulty)?;
    let exercise = fresh_exercise(&state, selector, difficulty);
    Ok(Json(to_client_exercise(&exercise)))
}

// ---------------------------------------------------------------------------
// POST /api/english/answer   body: { exercise_id, user_answer, session_id }
// ---------------------------------------------------------------------------

pub async fn submit_english_answer(
    State(state): State<AppState>,
    Json(body): Json<EnglishAnswerRequest>,
) -> Result<Json<Value>, ApiError> {
    answer_for(
        &state,
        Subject::English,
        &body.exercise_id,
        &body.user_answer,
        &body.session_id,
    )
}

// ---------------------------------------------------------------------------
// GET /api/progress/{session_id}
// ---------------------------------------------------------------------------

pub async fn get_progress(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Value> {
    let mut progress = state.progress.lock().unwrap();
    let entry = progress.entry(session_id.clone()).or_default().clone();
    let mut body = serde_json::to_value(entry).unwrap_or_else(|_| json!({}));
    body["session_id"] = Value::String(session_id);
    Json(body)
}
