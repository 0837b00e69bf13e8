//! Routing from a resume path to its extracted plain text

use crate::error::{MatchError, Result};
use crate::extract::extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use crate::extract::file_type::FileType;
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct DocumentReader;

impl DocumentReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(MatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path)
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path)
            }
            FileType::Unknown => Err(MatchError::UnsupportedFormat(format!(
                "Unsupported resume format: {}",
                path.display()
            ))),
        }
    }
}
