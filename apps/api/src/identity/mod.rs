// Identity verification: does the live selfie show the same person as any of
// the reference photos?
//
// The largest face in each image is its subject. Embeddings are compared by
// cosine similarity; the best reference match decides.

pub mod embedder;
pub mod handlers;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identity::embedder::{EmbedError, FaceEmbedder};

pub const MATCH_THRESHOLD: f32 = 0.75;
pub const NO_FACE_MESSAGE: &str = "No face detected in selfie image.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    /// `[x1, y1, x2, y2]` in pixels.
    pub bbox: [f32; 4],
    pub embedding: Vec<f32>,
}

impl DetectedFace {
    pub fn area(&self) -> f32 {
        let [x1, y1, x2, y2] = self.bbox;
        (x2 - x1) * (y2 - y1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    Compared { verified: bool, confidence: f32 },
    NoFaceInSelfie,
}

pub fn largest_face(faces: Vec<DetectedFace>) -> Option<DetectedFace> {
    faces
        .into_iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
}

fn l2_normalized(v: &[f32]) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return vec![0.0; v.len()];
    }
    v.iter().map(|x| x / norm).collect()
}

/// Cosine similarity in [-1, 1]. Zero vectors and mismatched lengths score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    l2_normalized(a)
        .iter()
        .zip(l2_normalized(b).iter())
        .map(|(x, y)| x * y)
        .sum()
}

/// Best similarity over references that contain a face, starting from 0.
pub fn best_match(selfie: &[f32], references: &[Vec<f32>]) -> f32 {
    references
        .iter()
        .map(|reference| cosine_similarity(selfie, reference))
        .fold(0.0, f32::max)
}

pub async fn verify(
    embedder: &dyn FaceEmbedder,
    selfie: &[u8],
    references: &[Bytes],
) -> Result<Verification, EmbedError> {
    let Some(subject) = largest_face(embedder.detect_faces(selfie).await?) else {
        return Ok(Verification::NoFaceInSelfie);
    };

    let mut reference_embeddings = Vec::with_capacity(references.len());
    for (i, reference) in references.iter().enumerate() {
        match largest_face(embedder.detect_faces(reference).await?) {
            Some(face) => reference_embeddings.push(face.embedding),
            None => debug!("Reference {i} has no face, skipping"),
        }
    }

    let best = best_match(&subject.embedding, &reference_embeddings);
    Ok(Verification::Compared {
        verified: best >= MATCH_THRESHOLD,
        confidence: best,
    })
}
