// Résumé analysis pipeline.
// Strict order: normalize → classify → extract → score. Feedback is produced
// by the caller from the returned profile and score.

pub mod classifier;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod profile;
pub mod scoring;
pub mod sections;
pub mod taxonomy;

use crate::analysis::extractor::{ExtractionError, Extractor};
use crate::analysis::profile::{ExtractedProfile, ScoreResult};

/// Profile and score for one document.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub profile: ExtractedProfile,
    pub score: ScoreResult,
}

/// Runs the core pipeline over raw document text. Scoring sees the normalized
/// text, so redacted PII never counts towards the word total.
pub async fn analyze_text(extractor: &Extractor, raw_text: &str) -> Result<Analysis, ExtractionError> {
    let clean_text = normalizer::normalize(raw_text);
    let profile = extractor.extract(&clean_text).await?;
    let score = scoring::score(&profile, &clean_text);
    Ok(Analysis { profile, score })
}
