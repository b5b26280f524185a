use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{Cursor, Read, Seek},
};
use zip::ZipArchive;

const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Locate the main document part by walking the package relationships
fn main_document_name<R>(archive: &mut ZipArchive<R>) -> Option<String>
where
    R: Read + Seek,
{
    let mut rels = archive.by_name("_rels/.rels").ok()?;
    let mut rels_buffer = String::new();
    rels.read_to_string(&mut rels_buffer).ok()?;

    let rel_xml = roxmltree::Document::parse(&rels_buffer).ok()?;

    rel_xml
        .descendants()
        .find(|elem| elem.attribute("Type") == Some(OFFICE_DOCUMENT_REL))
        .and_then(|elem| elem.attribute("Target"))
        .map(|target| target.trim_start_matches('/').to_owned())
}

/// Extract text from an in-memory OOXML document
pub fn extract_from_mem(bytes: &[u8]) -> Result<String> {
    let reader = Cursor::new(bytes);
    let mut archive = ZipArchive::new(reader)
        .with_context(|| "Failed to open document as a ZIP archive")?;

    parse(&mut archive)
}

/// Extract text from a .docx file on disk
pub fn extract_from_path(path: &str) -> Result<String> {
    let file: File =
        File::open(path).with_context(|| format!("Failed to open document: {}", path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to open document as a ZIP archive: {}", path))?;

    parse(&mut archive)
}

/// Join the text of every paragraph with a single space, in document
/// order. Empty paragraphs still take part in the join.
fn parse<R>(archive: &mut ZipArchive<R>) -> Result<String>
where
    R: Read + Seek,
{
    let doc_name = main_document_name(archive)
        .ok_or_else(|| anyhow::anyhow!("Could not find main document part in archive"))?;

    let mut document = archive
        .by_name(&doc_name)
        .with_context(|| format!("Could not find {} in archive", doc_name))?;

    let mut buffer = String::new();
    document
        .read_to_string(&mut buffer)
        .with_context(|| "Failed to read document part")?;

    let doc = roxmltree::Document::parse(&buffer)
        .with_context(|| "Could not parse document XML")?;

    let root = doc
        .root()
        .first_child()
        .ok_or_else(|| anyhow::anyhow!("Document XML has no root element"))?;

    let body = root
        .first_element_child()
        .ok_or_else(|| anyhow::anyhow!("Document root element is empty"))?;

    let paragraphs: Vec<String> = body
        .descendants()
        .filter(|elem| elem.has_tag_name("p"))
        .map(|para| {
            para.descendants()
                .filter(|elem| elem.has_tag_name("t"))
                .filter_map(|elem| elem.text())
                .collect::<String>()
        })
        .collect();

    Ok(paragraphs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentType;
    use std::io::Write;
    use zip::write::FileOptions;

    const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

    fn document_xml(paragraphs: &[&str]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p)
                }
            })
            .collect();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        )
    }

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default();

        writer.start_file("_rels/.rels", options).unwrap();
        writer.write_all(RELS.as_bytes()).unwrap();

        writer.start_file("word/document.xml", options).unwrap();
        writer
            .write_all(document_xml(paragraphs).as_bytes())
            .unwrap();

        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_joins_paragraphs_with_spaces() {
        let bytes = build_docx(&["Experienced in Python", "and Docker"]);
        let text = extract_from_mem(&bytes).unwrap();
        assert_eq!(text, "Experienced in Python and Docker");
    }

    #[test]
    fn test_empty_paragraphs_take_part_in_join() {
        let bytes = build_docx(&["Python", "", "SQL"]);
        let text = extract_from_mem(&bytes).unwrap();
        assert_eq!(text, "Python  SQL");
    }

    #[test]
    fn test_split_runs_within_a_paragraph() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default();

        writer.start_file("_rels/.rels", options).unwrap();
        writer.write_all(RELS.as_bytes()).unwrap();

        writer.start_file("word/document.xml", options).unwrap();
        writer
            .write_all(
                br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Kuber</w:t></w:r><w:r><w:t>netes</w:t></w:r></w:p></w:body></w:document>"#,
            )
            .unwrap();

        let bytes = writer.finish().unwrap().into_inner();
        assert_eq!(extract_from_mem(&bytes).unwrap(), "Kubernetes");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        assert!(extract_from_mem(b"plainly not a zip archive").is_err());
    }

    #[test]
    fn test_extract_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, build_docx(&["Python and AWS"])).unwrap();

        let text = extract_from_path(&path.to_string_lossy()).unwrap();
        assert_eq!(text, "Python and AWS");
    }

    #[test]
    fn test_dispatch_through_extract_text() {
        let bytes = build_docx(&["git and jenkins"]);
        let text = crate::extract::extract_text(&bytes, ContentType::Docx).unwrap();
        assert_eq!(text, "git and jenkins");
    }
}
