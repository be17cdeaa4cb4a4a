//! Tagger contract and pre-computed annotations
//!
//! The scanner never tokenizes or tags text itself. It asks a [`Tagger`] for
//! the tokens and named entities of each line and only consumes the tag
//! strings, which the [`Lexicon`](crate::lexicon::Lexicon) then maps onto
//! closed categories.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use thiserror::Error;

/// A token as produced by a POS tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Universal part-of-speech tag (`PRON`, `VERB`, ...)
    pub pos: String,
    /// Fine-grained tag (`VBD`, `NN`, ...)
    pub tag: String,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            tag: tag.into(),
        }
    }
}

/// A named entity span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity label (`DATE`, `MONEY`, ...)
    pub label: String,
    /// Text covered by the entity
    pub text: String,
}

impl Entity {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Tokens and entities of one line, both in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Failure reported by a tagger
#[derive(Debug, Error)]
pub enum TaggerError {
    /// The tagger has nothing for this line
    #[error("no annotation available for line: {0}")]
    MissingAnnotation(String),

    /// The tagger could not process the line
    #[error("tagging failed: {0}")]
    Failed(String),
}

/// Source of token and entity annotations for a line of text
pub trait Tagger {
    /// Annotate a single line
    fn annotate(&self, line: &str) -> Result<Annotation, TaggerError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Annotation, TaggerError>,
{
    fn annotate(&self, line: &str) -> Result<Annotation, TaggerError> {
        self(line)
    }
}

/// A line together with its annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    pub text: String,
    #[serde(flatten)]
    pub annotation: Annotation,
}

impl AnnotatedLine {
    /// A line with no tokens or entities yet
    pub fn unannotated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Annotation::default(),
        }
    }
}

/// An extracted resume with per-line annotations from an external NLP pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    pub lines: Vec<AnnotatedLine>,
    /// Hyperlinks embedded in the source document
    #[serde(default)]
    pub links: Vec<String>,
}

impl AnnotatedDocument {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Line texts in reading order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// A tagger answering from this document's annotations
    pub fn tagger(&self) -> DocumentTagger<'_> {
        DocumentTagger::new(self)
    }
}

/// Answers from a document's annotations by line position.
///
/// Lines are expected in document order. Each call resumes at the line after
/// the previous match, so repeated bullet texts get their own annotations. A
/// text not found ahead of the cursor is searched from the top, which also
/// lets a second pass over the document start over.
#[derive(Debug)]
pub struct DocumentTagger<'a> {
    lines: &'a [AnnotatedLine],
    cursor: Cell<usize>,
    require_tokens: bool,
}

impl<'a> DocumentTagger<'a> {
    pub fn new(document: &'a AnnotatedDocument) -> Self {
        Self {
            lines: &document.lines,
            cursor: Cell::new(0),
            require_tokens: false,
        }
    }

    /// Treat lines without tokens as never tagged.
    ///
    /// A tagger always yields at least one token for a non-empty line, so an
    /// empty token list means the line was extracted but not annotated.
    pub fn require_tokens(mut self, require: bool) -> Self {
        self.require_tokens = require;
        self
    }

    fn locate(&self, line: &str) -> Option<&'a AnnotatedLine> {
        let start = self.cursor.get().min(self.lines.len());
        let position = (start..self.lines.len())
            .chain(0..start)
            .find(|&index| self.lines[index].text == line)?;
        self.cursor.set(position + 1);
        Some(&self.lines[position])
    }
}

impl Tagger for DocumentTagger<'_> {
    fn annotate(&self, line: &str) -> Result<Annotation, TaggerError> {
        match self.locate(line) {
            Some(found) if self.require_tokens && found.annotation.tokens.is_empty() => {
                Err(TaggerError::MissingAnnotation(line.to_string()))
            }
            Some(found) => Ok(found.annotation.clone()),
            None => Err(TaggerError::MissingAnnotation(line.to_string())),
        }
    }
}
