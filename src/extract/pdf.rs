use anyhow::{Context, Result};

/// Extract text from an in-memory PDF document.
///
/// Pages without extractable text (scanned images, vector-only pages)
/// contribute nothing; they are skipped rather than reported as errors.
pub fn extract_from_mem(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .with_context(|| "Failed to extract text from PDF")
}

/// Extract text from a PDF file on disk
pub fn extract_from_path(path: &str) -> Result<String> {
    pdf_extract::extract_text(path)
        .with_context(|| format!("Failed to extract text from PDF: {}", path))
}
