//! HTTP client for an out-of-process NLP service (e.g. a spaCy sidecar).
//!
//! Contract:
//!   GET  {base}/health                      → 2xx when models are loaded
//!   POST {base}/entities  {"text": "..."}   → {"entities": [{"label": "ORG", "text": "..."}]}
//!   POST {base}/phrases   {"text": "..."}   → {"phrases": ["...", ...]}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

use crate::nlp::{Entity, NlpEngine, NlpError};

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
struct PhrasesResponse {
    phrases: Vec<String>,
}

#[derive(Clone)]
pub struct RemoteNlpEngine {
    client: Client,
    base_url: String,
}

impl RemoteNlpEngine {
    /// Builds the client and checks the service is up. A failure here means
    /// the extractor has no recognizer and must not serve requests.
    pub async fn connect(base_url: &str) -> Result<Self, NlpError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        let engine = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        let response = engine
            .client
            .get(format!("{}/health", engine.base_url))
            .send()
            .await
            .map_err(|e| NlpError::Unavailable(format!("health check failed: {e}")))?;
        if !response.status().is_success() {
            return Err(NlpError::Unavailable(format!(
                "health check returned {}",
                response.status()
            )));
        }

        info!("Remote NLP engine reachable at {}", engine.base_url);
        Ok(engine)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, text: &str) -> Result<T, NlpError> {
        let response = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .json(&TextRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NlpError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("NLP service {path} call succeeded");
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl NlpEngine for RemoteNlpEngine {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn named_entities(&self, text: &str) -> Result<Vec<Entity>, NlpError> {
        let body: EntitiesResponse = self.post("entities", text).await?;
        Ok(body.entities)
    }

    async fn ranked_phrases(&self, text: &str) -> Result<Vec<String>, NlpError> {
        let body: PhrasesResponse = self.post("phrases", text).await?;
        Ok(body.phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::EntityLabel;

    #[test]
    fn test_entities_response_deserializes() {
        let body = r#"{"entities": [{"label": "ORG", "text": "Acme"}, {"label": "PERSON", "text": "Jane"}]}"#;
        let parsed: EntitiesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.entities.len(), 2);
        assert_eq!(parsed.entities[0].label, EntityLabel::Org);
        assert_eq!(parsed.entities[1].label, EntityLabel::Other);
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_service_is_unavailable() {
        let result = RemoteNlpEngine::connect("http://127.0.0.1:9").await;
        assert!(matches!(result, Err(NlpError::Unavailable(_))));
    }
}
