use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::handler::{
    get_english_exercise, get_math_problem, get_progress, submit_english_answer,
    submit_math_answer, AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/math/problems", get(get_math_problem))
        .route("/api/math/answer", post(submit_math_answer))
        .route("/api/english/exercises", get(get_english_exercise))
        .route("/api/english/answer", post(submit_english_answer))
        .route("/api/progress/:session_id", get(get_progress))
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "edu_drill_server - voice-powered practice drills" }))
}
