pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::identity::handlers as identity;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::banner_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze-resume", post(analysis::handle_analyze_resume))
        .route(
            "/analyze-resume/raw",
            post(analysis::handle_analyze_resume_raw),
        )
        .route("/generate-quiz", post(quiz::handle_generate_quiz))
        .route("/verify-face", post(identity::handle_verify_face))
        .with_state(state)
}
