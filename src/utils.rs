use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::from_utf8;

use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::IResult;

use anyhow::{Context, Result};

use crate::types::ContentType;

/// Parse one vocabulary line into a skill term
pub fn parse_skill(input: &str) -> IResult<&str, &str> {
    let (input, _) = space0(input)?;
    let (input, term) = is_not("\n")(input)?;

    Ok((input, term.trim()))
}

/// Read a skill vocabulary from a file, one term per line
pub fn read_skills_from_file(path: &str) -> Result<Vec<String>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open skills file: {}", path))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read skills file: {}", path))?;

    read_skills_from_string(&content)
}

/// Read a skill vocabulary from a byte slice
pub fn read_skills_from_mem(bytes: &[u8]) -> Result<Vec<String>> {
    let content = from_utf8(bytes)
        .with_context(|| "Failed to parse skills content as UTF-8")?;

    read_skills_from_string(content)
}

fn read_skills_from_string(content: &str) -> Result<Vec<String>> {
    let mut skills: Vec<String> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_skill(line) {
            Ok((_, term)) => {
                let term = term.to_lowercase();
                if !skills.contains(&term) {
                    skills.push(term);
                }
            }
            Err(_) => {
                eprintln!("Warning: Failed to parse line {}: '{}'", line_num + 1, line);
            }
        }
    }

    if skills.is_empty() {
        return Err(anyhow::anyhow!("No skill terms found in input"));
    }

    Ok(skills)
}

/// Resolve a content type from a declared MIME label
pub fn parse_content_type(mime: &str) -> ContentType {
    match mime {
        "text/plain" => ContentType::Text,
        "application/pdf" => ContentType::Pdf,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            ContentType::Docx
        }
        _ => ContentType::Other,
    }
}

/// Infer a content type from a file name, defaulting to plain text
pub fn content_type_from_path(path: &Path) -> ContentType {
    let name = path.to_string_lossy().to_lowercase();

    if name.ends_with(".docx") {
        ContentType::Docx
    } else if name.ends_with(".pdf") {
        ContentType::Pdf
    } else {
        ContentType::Text
    }
}
