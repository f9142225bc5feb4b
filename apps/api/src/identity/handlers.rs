use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::identity::{verify, Verification, NO_FACE_MESSAGE};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Verification> for VerifyResponse {
    fn from(verification: Verification) -> Self {
        match verification {
            Verification::Compared {
                verified,
                confidence,
            } => Self {
                verified,
                confidence: Some(confidence),
                error: None,
            },
            Verification::NoFaceInSelfie => Self {
                verified: false,
                confidence: None,
                error: Some(NO_FACE_MESSAGE.to_string()),
            },
        }
    }
}

/// POST /verify-face
/// Multipart: one `selfie` field and one or more `references` fields.
pub async fn handle_verify_face(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<VerifyResponse>, AppError> {
    let embedder = state.face_embedder.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("Face verification service is not configured".to_string())
    })?;

    let mut selfie: Option<Bytes> = None;
    let mut references: Vec<Bytes> = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("selfie") => selfie = Some(field.bytes().await?),
            Some("references") => references.push(field.bytes().await?),
            _ => {}
        }
    }

    let selfie = selfie
        .ok_or_else(|| AppError::Validation("Missing multipart field 'selfie'".to_string()))?;
    if references.is_empty() {
        return Err(AppError::Validation(
            "At least one 'references' image is required".to_string(),
        ));
    }

    let verification = verify(embedder.as_ref(), &selfie, &references).await?;
    info!(
        "Face verification via {} against {} references: {:?}",
        embedder.name(),
        references.len(),
        verification
    );
    Ok(Json(verification.into()))
}
