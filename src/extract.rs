//! Document loaders for supported input formats.
//!
//! Loading dispatches on file extension: plain text and Markdown decode as
//! UTF-8, `.docx` concatenates paragraph text with newlines, `.pdf` yields
//! the extracted page text. Anything else is an unsupported format.

use std::fs;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::error::ExtractError;

/// Turns a file on disk into raw document text.
pub trait DocumentLoader {
    /// Whether this loader handles the given file extension.
    fn can_load(&self, path: &Path) -> bool;

    /// Load and extract the document's text.
    fn load(&self, path: &Path) -> Result<String, ExtractError>;
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractError> {
    fs::read(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Plain text and Markdown files, decoded as UTF-8.
pub struct TextLoader;

impl DocumentLoader for TextLoader {
    fn can_load(&self, path: &Path) -> bool {
        matches!(extension(path).as_str(), "txt" | "text" | "md" | "markdown")
    }

    fn load(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = read_bytes(path)?;
        String::from_utf8(bytes)
            .map_err(|_| ExtractError::InvalidUtf8(path.display().to_string()))
    }
}

/// Word documents: paragraph text concatenated with newlines.
pub struct DocxLoader;

impl DocumentLoader for DocxLoader {
    fn can_load(&self, path: &Path) -> bool {
        extension(path) == "docx"
    }

    fn load(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = read_bytes(path)?;
        let docx = read_docx(&bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

        let mut paragraphs = Vec::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let mut text = String::new();
                for para_child in paragraph.children {
                    if let ParagraphChild::Run(run) = para_child {
                        for run_child in run.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                paragraphs.push(text);
            }
        }
        Ok(paragraphs.join("\n"))
    }
}

/// PDF documents: extracted text, pages concatenated with newlines.
pub struct PdfLoader;

impl DocumentLoader for PdfLoader {
    fn can_load(&self, path: &Path) -> bool {
        extension(path) == "pdf"
    }

    fn load(&self, path: &Path) -> Result<String, ExtractError> {
        pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

/// Extract the text of a document, choosing a loader by file extension.
///
/// # Errors
///
/// [`ExtractError::UnsupportedFormat`] when no loader claims the extension,
/// or the chosen loader's failure.
pub fn extract_document(path: &Path) -> Result<String, ExtractError> {
    let loaders: [&dyn DocumentLoader; 3] = [&TextLoader, &DocxLoader, &PdfLoader];
    for loader in loaders {
        if loader.can_load(path) {
            return loader.load(path);
        }
    }
    Err(ExtractError::UnsupportedFormat(
        path.display().to_string(),
    ))
}
