use std::collections::BTreeSet;

use serde::Serialize;

/// Vocabulary terms found in a piece of extracted text
pub type SkillSet = BTreeSet<String>;

/// Declared content type of an uploaded document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    /// Plain UTF-8 text
    Text,
    /// Portable Document Format (.pdf)
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
    /// Anything else; extraction yields empty text
    Other,
}

impl ContentType {
    /// Get the file extension for this content type
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            ContentType::Text => Some(".txt"),
            ContentType::Pdf => Some(".pdf"),
            ContentType::Docx => Some(".docx"),
            ContentType::Other => None,
        }
    }

    /// Get the MIME type for this content type
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            ContentType::Text => Some("text/plain"),
            ContentType::Pdf => Some("application/pdf"),
            ContentType::Docx => Some(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
            ContentType::Other => None,
        }
    }
}

/// Outcome of comparing a resume against a job description
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FitResult {
    /// Percentage of job-description skills also present in the resume, 0-100
    pub score: u32,
    /// Skills present in both documents
    pub matched: SkillSet,
    /// Skills the job description asks for that the resume lacks
    pub missing: SkillSet,
}
