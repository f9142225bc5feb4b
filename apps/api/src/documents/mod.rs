// Document reader: uploaded bytes + file extension → plain text.
// Parsing is CPU-bound; callers run it on the blocking pool.

pub mod docx;
pub mod pdf;

use std::path::Path;

use thiserror::Error;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Only PDF and DOCX files are supported.";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read document: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    /// Also used for legacy `.doc` uploads.
    Docx,
}

impl DocumentFormat {
    /// Accepts `.pdf`, `.docx` and `.doc` in any case, with or without the dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" | "doc" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Lower-cased extension of `filename` including the leading dot, or "".
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

pub fn parse_document(bytes: &[u8], extension: &str) -> Result<String, DocumentError> {
    match DocumentFormat::from_extension(extension) {
        Some(DocumentFormat::Pdf) => pdf::extract_text(bytes),
        Some(DocumentFormat::Docx) => docx::extract_text(bytes),
        None => Err(DocumentError::UnsupportedFormat(extension.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("CV.PDF"), ".pdf");
        assert_eq!(extension_of("resume.final.docx"), ".docx");
        assert_eq!(extension_of("README"), "");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension(".pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("DOCX"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension(".doc"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension(".txt"), None);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = parse_document(b"hello", ".txt");
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat(ext)) if ext == ".txt"));
    }
}
