use std::sync::Arc;

use crate::analysis::extractor::Extractor;
use crate::feedback::FeedbackSynthesizer;
use crate::identity::embedder::FaceEmbedder;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Absent when the NLP engine failed to start; analysis then answers 503.
    pub extractor: Option<Extractor>,
    pub feedback: FeedbackSynthesizer,
    /// Absent when no face service is configured or reachable.
    pub face_embedder: Option<Arc<dyn FaceEmbedder>>,
}
