//! Turns normalized résumé text into an `ExtractedProfile`.
//!
//! Flow: is_resume gate → named entities → section segmentation →
//!       taxonomy skill matching → ranked keywords (falls back to skills).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::classifier::is_resume;
use crate::analysis::normalizer::clean_for_nlp;
use crate::analysis::profile::{Entities, ExtractedProfile, ResumeProfile};
use crate::analysis::sections::HeaderTable;
use crate::analysis::taxonomy::SkillTaxonomy;
use crate::nlp::{EntityLabel, NlpEngine, NlpError};

pub const INVALID_DOCUMENT_MESSAGE: &str = "Invalid Document: This does not appear to be a professional Resume or CV. Please ensure you upload a document with clear sections like Education, Experience, and Skills.";

const MAX_KEYWORDS: usize = 30;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The entity recognizer could not run. Scoring without it would silently
    /// return empty structure, so the request fails instead.
    #[error("named-entity recognizer unavailable: {0}")]
    DependencyUnavailable(#[source] NlpError),
}

/// Stateless extractor over shared, read-only tables and an injected NLP engine.
#[derive(Clone)]
pub struct Extractor {
    nlp: Arc<dyn NlpEngine>,
    headers: Arc<HeaderTable>,
    taxonomy: Arc<SkillTaxonomy>,
}

impl Extractor {
    pub fn new(nlp: Arc<dyn NlpEngine>, headers: Arc<HeaderTable>, taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self {
            nlp,
            headers,
            taxonomy,
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.nlp.name()
    }

    pub async fn extract(&self, text: &str) -> Result<ExtractedProfile, ExtractionError> {
        if !is_resume(text) {
            debug!("Document rejected by classifier");
            return Ok(ExtractedProfile::Rejected {
                error: INVALID_DOCUMENT_MESSAGE.to_string(),
            });
        }

        // The engine may be out of process; it never sees contact details.
        let nlp_text = clean_for_nlp(text);

        let mut entities = Entities::default();
        for entity in self
            .nlp
            .named_entities(&nlp_text)
            .await
            .map_err(ExtractionError::DependencyUnavailable)?
        {
            match entity.label {
                EntityLabel::Org => entities.organizations.push(entity.text),
                EntityLabel::Date => entities.dates.push(entity.text),
                EntityLabel::Other => {}
            }
        }

        let sections = self.headers.segment(text);
        let taxonomy_skills = self.taxonomy.match_skills(text);

        let keywords = match self.nlp.ranked_phrases(&nlp_text).await {
            Ok(mut phrases) => {
                phrases.truncate(MAX_KEYWORDS);
                phrases
            }
            Err(e) => {
                warn!("Keyword ranking failed, using taxonomy skills instead: {e}");
                taxonomy_skills.iter().cloned().collect()
            }
        };

        debug!(
            "Extracted {} sections, {} taxonomy skills, {} keywords via {}",
            sections.present_kinds().len(),
            taxonomy_skills.len(),
            keywords.len(),
            self.nlp.name()
        );

        Ok(ExtractedProfile::Resume(ResumeProfile {
            sections,
            taxonomy_skills,
            keywords,
            entities,
        }))
    }
}
