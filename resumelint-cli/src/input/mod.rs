//! Input handling module

pub mod extract;
pub mod file_reader;
pub mod glob_resolver;

pub use extract::{
    annotation_links, document_from_text, extract_document, find_links, load_document, merge_links,
};
pub use file_reader::{FileReader, InputKind};
pub use glob_resolver::resolve_patterns;
