pub mod docx;
pub mod pdf;

use std::str::from_utf8;

use anyhow::{Context, Result};

use crate::types::ContentType;

pub use docx::extract_from_path as extract_docx_from_path;
pub use pdf::extract_from_path as extract_pdf_from_path;

/// Extract the plain-text content of a document.
///
/// Plain text is decoded as UTF-8 (invalid bytes are an error), PDF and
/// DOCX are parsed, and any other content type silently yields an empty
/// string.
pub fn extract_text(bytes: &[u8], content_type: ContentType) -> Result<String> {
    match content_type {
        ContentType::Text => Ok(from_utf8(bytes)
            .with_context(|| "Document is not valid UTF-8 text")?
            .to_owned()),
        ContentType::Pdf => pdf::extract_from_mem(bytes),
        ContentType::Docx => docx::extract_from_mem(bytes),
        ContentType::Other => Ok(String::new()),
    }
}
