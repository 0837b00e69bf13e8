//! Resume document handling
//! Covers file type detection, per-format text extraction, and routing

pub mod extractor;
pub mod file_type;
pub mod reader;

pub use file_type::FileType;
pub use reader::DocumentReader;
