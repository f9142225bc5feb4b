use std::panic;

use tracing::debug;

use crate::documents::DocumentError;

/// Extracts the text layer of every page, in page order.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| DocumentError::Malformed("PDF parser aborted".to_string()))?;

    let text = result.map_err(|e| DocumentError::Malformed(e.to_string()))?;
    debug!("Extracted {} chars from PDF", text.len());
    Ok(text)
}
