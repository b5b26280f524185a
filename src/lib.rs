pub mod cmd;
pub mod extract;
pub mod matcher;
pub mod types;
pub mod utils;

pub use extract::{extract_docx_from_path, extract_pdf_from_path, extract_text};
pub use matcher::{calculate_fit_score, default_vocabulary, extract_skills, recommendation};
pub use types::{ContentType, FitResult, SkillSet};
pub use utils::{
    content_type_from_path, parse_content_type, read_skills_from_file, read_skills_from_mem,
};
