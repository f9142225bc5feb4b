//! Face embedder seam. The verifier only needs detected faces with an
//! embedding each; how they are produced lives behind `FaceEmbedder`.
//!
//! Remote contract:
//!   GET  {base}/health                        → 2xx when the model is loaded
//!   POST {base}/faces  multipart `image`      → {"faces": [{"bbox": [x1, y1, x2, y2], "embedding": [...]}]}
//!                                               400 / 422 when the image cannot be decoded

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::identity::DetectedFace;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Could not decode image.")]
    Decode,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Face service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Carried in `AppState` as `Arc<dyn FaceEmbedder>`.
#[async_trait]
pub trait FaceEmbedder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Every face found in the image. An empty list means no face; an
    /// undecodable image is `EmbedError::Decode`.
    async fn detect_faces(&self, image: &[u8]) -> Result<Vec<DetectedFace>, EmbedError>;
}

#[derive(Debug, Deserialize)]
struct FacesResponse {
    faces: Vec<DetectedFace>,
}

#[derive(Clone)]
pub struct RemoteFaceEmbedder {
    client: Client,
    base_url: String,
}

impl RemoteFaceEmbedder {
    pub async fn connect(base_url: &str) -> Result<Self, EmbedError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        let embedder = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        let response = embedder
            .client
            .get(format!("{}/health", embedder.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(EmbedError::Api {
                status: response.status().as_u16(),
                message: "health check failed".to_string(),
            });
        }

        info!("Face service reachable at {}", embedder.base_url);
        Ok(embedder)
    }
}

#[async_trait]
impl FaceEmbedder for RemoteFaceEmbedder {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn detect_faces(&self, image: &[u8]) -> Result<Vec<DetectedFace>, EmbedError> {
        let form = multipart::Form::new().part(
            "image",
            multipart::Part::bytes(image.to_vec()).file_name("image"),
        );
        let response = self
            .client
            .post(format!("{}/faces", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            return Err(EmbedError::Decode);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: FacesResponse = response.json().await?;
        debug!("Face service found {} faces", body.faces.len());
        Ok(body.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_response_deserializes() {
        let body = r#"{"faces": [{"bbox": [0, 0, 10, 20], "embedding": [0.6, 0.8]}]}"#;
        let parsed: FacesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.faces.len(), 1);
        assert_eq!(parsed.faces[0].area(), 200.0);
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_service_fails() {
        assert!(RemoteFaceEmbedder::connect("http://127.0.0.1:9").await.is_err());
    }
}
