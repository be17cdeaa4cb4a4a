//! Turning resume files into documents the scanner can read
//!
//! Annotated JSON documents are loaded as-is. PDF and plain text inputs are
//! reduced to whitespace-normalized lines plus their links: URI actions of
//! PDF link annotations first, then links written out in the text. Such
//! documents carry no annotations until an external tagger fills them in.

use anyhow::{Context, Result};
use lopdf::{Document, Object};
use regex::Regex;
use resumelint_core::nlp::{AnnotatedDocument, AnnotatedLine};
use std::path::Path;
use std::sync::OnceLock;

use super::file_reader::{FileReader, InputKind};
use crate::error::CliError;

static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static LINK: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"))
}

fn link() -> &'static Regex {
    LINK.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:https?://|mailto:|www\.)[^\s<>"'()\[\]{}]+"#)
            .expect("Invalid link pattern")
    })
}

/// Load any supported input as a document
pub fn load_document(path: &Path) -> Result<AnnotatedDocument> {
    match InputKind::from_path(path) {
        InputKind::Document => {
            let json = FileReader::read_text(path)?;
            AnnotatedDocument::from_json_str(&json)
                .with_context(|| format!("Invalid document JSON: {}", path.display()))
        }
        InputKind::Pdf | InputKind::Text => extract_document(path),
    }
}

/// Extract lines and links from a PDF or plain text file
pub fn extract_document(path: &Path) -> Result<AnnotatedDocument> {
    let (text, anchored) = match InputKind::from_path(path) {
        InputKind::Pdf => {
            let bytes = FileReader::read_bytes(path)?;
            let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                CliError::UnsupportedInput(format!("{}: {e}", path.display()))
            })?;
            let anchored = annotation_links(&bytes).unwrap_or_else(|e| {
                log::warn!("Could not read link annotations of {}: {e}", path.display());
                Vec::new()
            });
            (text, anchored)
        }
        InputKind::Text => (FileReader::read_text(path)?, Vec::new()),
        InputKind::Document => {
            return Err(CliError::UnsupportedInput(format!(
                "{} is already a document",
                path.display()
            ))
            .into())
        }
    };

    let mut document = document_from_text(&text);
    document.links = merge_links(anchored, document.links);
    log::info!(
        "Extracted {} line(s) and {} link(s) from {}",
        document.lines.len(),
        document.links.len(),
        path.display()
    );
    Ok(document)
}

/// Build an unannotated document from raw text
pub fn document_from_text(text: &str) -> AnnotatedDocument {
    AnnotatedDocument {
        lines: normalize_lines(text)
            .into_iter()
            .map(AnnotatedLine::unannotated)
            .collect(),
        links: find_links(text),
    }
}

/// Collapse whitespace runs and drop blank lines
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| whitespace().replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Links in order of first appearance, without trailing punctuation
pub fn find_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for found in link().find_iter(text) {
        let url = found
            .as_str()
            .trim_end_matches(['.', ',', ';', ':', '!', '?']);
        if !links.iter().any(|seen| seen == url) {
            links.push(url.to_string());
        }
    }
    links
}

/// URIs behind the link annotations of every page, in page order
pub fn annotation_links(bytes: &[u8]) -> lopdf::Result<Vec<String>> {
    let pdf = Document::load_mem(bytes)?;
    let mut links = Vec::new();

    for page in pdf.get_pages().into_values() {
        let Ok(annotations) = pdf
            .get_dictionary(page)
            .and_then(|page| page.get(b"Annots"))
            .and_then(|annots| resolve(&pdf, annots))
            .and_then(Object::as_array)
        else {
            continue;
        };

        for annotation in annotations {
            let uri = resolve(&pdf, annotation)
                .and_then(Object::as_dict)
                .and_then(|annotation| annotation.get(b"A"))
                .and_then(|action| resolve(&pdf, action))
                .and_then(Object::as_dict)
                .and_then(|action| action.get(b"URI"))
                .and_then(|uri| resolve(&pdf, uri));
            if let Ok(Object::String(uri, _)) = uri {
                let uri = String::from_utf8_lossy(uri).trim().to_string();
                if !uri.is_empty() {
                    links.push(uri);
                }
            }
        }
    }

    Ok(links)
}

fn resolve<'a>(pdf: &'a Document, object: &'a Object) -> lopdf::Result<&'a Object> {
    match object {
        Object::Reference(id) => pdf.get_object(*id),
        other => Ok(other),
    }
}

/// `first` ahead of `rest`, keeping the first occurrence of each link
pub fn merge_links(first: Vec<String>, rest: Vec<String>) -> Vec<String> {
    let mut links: Vec<String> = Vec::with_capacity(first.len() + rest.len());
    for url in first.into_iter().chain(rest) {
        if !links.contains(&url) {
            links.push(url);
        }
    }
    links
}
