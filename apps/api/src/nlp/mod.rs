//! NLP engine — named entities and ranked key phrases for the extractor.
//!
//! `AppState` holds an `Arc<dyn NlpEngine>`, chosen at startup:
//! `RuleBasedEngine` by default, `RemoteNlpEngine` when `NLP_SERVICE_URL` is set.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod rake;
pub mod remote;
pub mod rule_based;

pub use remote::RemoteNlpEngine;
pub use rule_based::RuleBasedEngine;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NLP service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("NLP engine unavailable: {0}")]
    Unavailable(String),
}

/// Entity labels the extractor cares about. Anything else is carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Org,
    Date,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
}

impl Entity {
    pub fn new(label: EntityLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

#[async_trait]
pub trait NlpEngine: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    async fn named_entities(&self, text: &str) -> Result<Vec<Entity>, NlpError>;

    /// Key phrases, best first.
    async fn ranked_phrases(&self, text: &str) -> Result<Vec<String>, NlpError>;
}
