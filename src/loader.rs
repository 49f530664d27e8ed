use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

/// Formats the loader can decode. Detection from a file extension is the
/// caller's side of the contract; everything past that point is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    WordProcessor,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported document format: {0:?} (expected .pdf, .docx or .doc)")]
    UnsupportedFormat(String),
}

impl DocumentFormat {
    pub fn from_extension(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "doc" => Ok(Self::WordProcessor),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Convert document bytes to plain text. Never fails: a document that cannot
/// be decoded, or decodes to nothing, yields diagnostic text naming the
/// file, and downstream extraction degrades to a near-empty profile instead
/// of aborting.
///
/// Decoding runs on the blocking pool; a decoder panic (some malformed PDFs
/// trip the renderer) is absorbed by the task boundary and handled the same
/// way as a decode error.
pub async fn load_text(bytes: Vec<u8>, format: DocumentFormat, file_name: &str) -> String {
    let size = bytes.len();
    let decoded = tokio::task::spawn_blocking(move || match format {
        DocumentFormat::Pdf => decode_pdf(&bytes),
        DocumentFormat::WordProcessor => decode_docx(&bytes),
    })
    .await;

    match decoded {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!(file = %file_name, "no extractable text, substituting diagnostic text");
            diagnostic_text(file_name, size, format)
        }
        Err(err) => {
            warn!(file = %file_name, error = %err, "text decoder panicked");
            diagnostic_text(file_name, size, format)
        }
    }
}

fn decode_pdf(bytes: &[u8]) -> Option<String> {
    pdf_extract::extract_text_from_mem(bytes).ok()
}

/// A .docx is a ZIP container; the document body lives in
/// `word/document.xml`. Text accumulates from `<w:t>` runs; paragraph ends
/// and explicit breaks emit newlines so the line-oriented extractors see the
/// document's layout.
fn decode_docx(bytes: &[u8]) -> Option<String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).ok()?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .ok()?
        .read_to_string(&mut xml)
        .ok()?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut out = String::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) if e.name().as_ref() == b"w:t" => {
                in_text = true;
            }
            Ok(quick_xml::events::Event::Text(e)) if in_text => {
                out.push_str(&e.unescape().ok()?);
            }
            Ok(quick_xml::events::Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(quick_xml::events::Event::Empty(e)) => match e.name().as_ref() {
                b"w:br" => out.push('\n'),
                b"w:tab" => out.push(' '),
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
        buf.clear();
    }
    Some(out)
}

fn diagnostic_text(file_name: &str, size: usize, format: DocumentFormat) -> String {
    let mb = size as f64 / 1024.0 / 1024.0;
    match format {
        DocumentFormat::Pdf => format!(
            "Unable to extract text from PDF: {file_name}\n\
             Please ensure the PDF contains selectable text or try uploading a Word document instead.\n\
             File size: {mb:.2} MB"
        ),
        DocumentFormat::WordProcessor => format!(
            "Unable to extract text from document: {file_name}\n\
             Please ensure the file is a valid Word document with selectable text.\n\
             File size: {mb:.2} MB"
        ),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(body_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        let doc = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
        );
        writer.write_all(doc.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn format_detection_from_extension() {
        assert!(matches!(
            DocumentFormat::from_extension(Path::new("cv.pdf")),
            Ok(DocumentFormat::Pdf)
        ));
        assert!(matches!(
            DocumentFormat::from_extension(Path::new("CV.DOCX")),
            Ok(DocumentFormat::WordProcessor)
        ));
        assert!(matches!(
            DocumentFormat::from_extension(Path::new("cv.txt")),
            Err(LoadError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::from_extension(Path::new("no_extension")),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn docx_paragraphs_become_lines() {
        let bytes = docx_bytes(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>jane@x.com</w:t></w:r></w:p>",
        );
        let text = load_text(bytes, DocumentFormat::WordProcessor, "cv.docx").await;
        assert_eq!(text, "Jane Doe\njane@x.com\n");
    }

    #[tokio::test]
    async fn docx_breaks_and_split_runs() {
        let bytes = docx_bytes("<w:p><w:r><w:t>line one</w:t><w:br/><w:t>line two</w:t></w:r></w:p>");
        let text = load_text(bytes, DocumentFormat::WordProcessor, "cv.docx").await;
        assert_eq!(text, "line one\nline two\n");
    }

    #[tokio::test]
    async fn garbage_pdf_yields_diagnostic_text() {
        let text = load_text(b"not a pdf at all".to_vec(), DocumentFormat::Pdf, "broken.pdf").await;
        assert!(text.starts_with("Unable to extract text from PDF: broken.pdf"));
        assert!(text.contains("File size:"));
    }

    #[tokio::test]
    async fn garbage_docx_yields_diagnostic_text() {
        let text = load_text(vec![0u8; 16], DocumentFormat::WordProcessor, "broken.docx").await;
        assert!(text.contains("broken.docx"));
    }

    #[tokio::test]
    async fn empty_document_yields_diagnostic_text() {
        let bytes = docx_bytes("<w:p><w:r><w:t>   </w:t></w:r></w:p>");
        let text = load_text(bytes, DocumentFormat::WordProcessor, "blank.docx").await;
        assert!(text.starts_with("Unable to extract text from document: blank.docx"));
    }
}
