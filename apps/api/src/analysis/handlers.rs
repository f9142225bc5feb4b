use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::{analyze_text, Analysis};
use crate::documents::{
    extension_of, parse_document, DocumentFormat, UNSUPPORTED_FORMAT_MESSAGE,
};
use crate::errors::AppError;
use crate::feedback::FeedbackBundle;
use crate::state::AppState;

const FILENAME_HEADER: &str = "x-filename";
const DEFAULT_RAW_FILENAME: &str = "resume.pdf";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_score: f64,
    pub skills_detected: Vec<String>,
    pub sections_found: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub ats_feedback: String,
    pub status: &'static str,
}

impl AnalyzeResponse {
    fn new(analysis: Analysis, feedback: FeedbackBundle) -> Self {
        Self {
            resume_score: analysis.score.score,
            skills_detected: analysis.profile.skills_detected(),
            sections_found: analysis
                .score
                .sections_found
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            strengths: feedback.strengths,
            weaknesses: feedback.weaknesses,
            suggestions: feedback.suggestions,
            ats_feedback: feedback.summary,
            status: "success",
        }
    }
}

/// POST /analyze-resume
/// Multipart upload; the `file` field's filename decides the format.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let extension = extension_of(field.file_name().unwrap_or_default());
        if DocumentFormat::from_extension(&extension).is_none() {
            return Err(AppError::UnsupportedFormat(
                UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            ));
        }

        let bytes = field.bytes().await?;
        return run_analysis(&state, bytes, extension).await.map(Json);
    }

    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}

/// POST /analyze-resume/raw
/// Raw document body; the format comes from the `x-filename` header and
/// defaults to PDF.
pub async fn handle_analyze_resume_raw(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if body.is_empty() {
        return Err(AppError::Validation(
            "No file content received".to_string(),
        ));
    }

    let filename = headers
        .get(FILENAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_RAW_FILENAME);
    let extension = raw_extension(filename);

    run_analysis(&state, body, extension).await.map(Json)
}

fn raw_extension(filename: &str) -> String {
    let filename = filename.to_lowercase();
    if filename.ends_with(".docx") {
        ".docx".to_string()
    } else {
        ".pdf".to_string()
    }
}

async fn run_analysis(
    state: &AppState,
    bytes: Bytes,
    extension: String,
) -> Result<AnalyzeResponse, AppError> {
    let extractor = state.extractor.as_ref().ok_or_else(|| {
        AppError::ExtractionUnavailable("NLP engine is not initialised".to_string())
    })?;

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze_resume", %request_id, %extension, size = bytes.len());

    async move {
        let raw_text = tokio::task::spawn_blocking(move || parse_document(&bytes, &extension))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Document parser task failed: {e}")))??;

        let analysis = analyze_text(extractor, &raw_text).await?;
        let feedback = state
            .feedback
            .generate(analysis.score.score, &analysis.profile)
            .await;

        info!(
            "Analysis complete: score={} sections={:?} keywords={} rejected={}",
            analysis.score.score,
            analysis.score.sections_found,
            analysis.profile.resume().map_or(0, |r| r.keywords.len()),
            analysis.profile.error().is_some()
        );
        Ok::<_, AppError>(AnalyzeResponse::new(analysis, feedback))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_extension_defaults_to_pdf() {
        assert_eq!(raw_extension("CV.DOCX"), ".docx");
        assert_eq!(raw_extension("resume.pdf"), ".pdf");
        assert_eq!(raw_extension("resume.doc"), ".pdf");
        assert_eq!(raw_extension("scan"), ".pdf");
    }
}
