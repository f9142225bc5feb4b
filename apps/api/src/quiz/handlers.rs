use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::quiz::{generate_quiz, QuizQuestion, DEFAULT_QUESTION_COUNT};

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub skill: String,
    #[serde(default = "default_question_count")]
    pub num_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub status: &'static str,
    pub skill: String,
    pub total_questions: usize,
    pub passing_score: u32,
    pub questions: Vec<QuizQuestion>,
}

/// POST /generate-quiz
pub async fn handle_generate_quiz(Json(req): Json<QuizRequest>) -> Result<Json<QuizResponse>, AppError> {
    let quiz = generate_quiz(&req.skill, req.num_questions, &mut rand::thread_rng())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    info!("Generated {} questions for skill '{}'", quiz.total_questions, quiz.skill);

    Ok(Json(QuizResponse {
        status: "success",
        skill: quiz.skill,
        total_questions: quiz.total_questions,
        passing_score: quiz.passing_score,
        questions: quiz.questions,
    }))
}
