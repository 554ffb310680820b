//! edu_drill_server — serves the practice engine to the browser frontend.
//!
//! Endpoints:
//!
//! - `GET  /api/math/problems?type=&difficulty=`
//! - `POST /api/math/answer`
//! - `GET  /api/english/exercises?type=`
//! - `POST /api/english/answer`
//! - `GET  /api/progress/{session_id}`

mod learning;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use learning::handler::new_state;
use learning::routes::router;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let state = new_state();
    // The frontend is served from a different origin during development.
    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
