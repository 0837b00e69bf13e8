//! Text extraction from resume file formats

use crate::error::{MatchError, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use log::debug;
use lopdf::Document;
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let doc = Document::load(path).map_err(|e| {
            MatchError::PdfExtraction(format!(
                "Failed to open PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // A page that fails to decode contributes empty text; the rest still count.
        let mut text = String::new();
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    debug!(
                        "Skipping unreadable page {} of '{}': {}",
                        page_num,
                        path.display(),
                        e
                    );
                }
            }
        }
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        let docx = read_docx(&bytes).map_err(|e| {
            MatchError::DocxExtraction(format!(
                "Failed to parse DOCX '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Paragraph text in document order, one line per paragraph.
        let mut text = String::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                for para_child in paragraph.children {
                    if let ParagraphChild::Run(run) = para_child {
                        for run_child in run.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                text.push('\n');
            }
        }
        Ok(text)
    }
}
