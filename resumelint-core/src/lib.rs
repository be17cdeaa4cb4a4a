//! Sentence classification and linguistic feature extraction for resumes
//!
//! This crate scans the lines of a resume, in reading order, and collects the
//! signals a reviewer cares about: a properly prefixed phone number, pronoun
//! use, quantified impact, action-verb openers, tense repetition, and whether
//! each section lists its entries newest first.
//!
//! # Architecture
//!
//! - **Lexicon**: immutable vocabularies and the pure classifiers built on them
//! - **Tense tally** and **section tracker**: the scan's mutable state
//! - **Scanner**: the left-to-right fold that drives everything
//! - **Critique** and **links**: turning results into feedback
//!
//! Tokenization, tagging and entity recognition are delegated to a
//! [`Tagger`]; the crate only consumes tag strings.
//!
//! # Example
//!
//! ```rust
//! use resumelint_core::nlp::{Annotation, Entity, TaggerError, Token};
//! use resumelint_core::{default_lexicon, SentenceScanner};
//!
//! let tagger = |line: &str| -> Result<Annotation, TaggerError> {
//!     Ok(match line {
//!         "Managed a team of 5 people" => Annotation {
//!             tokens: vec![
//!                 Token::new("Managed", "VERB", "VBD"),
//!                 Token::new("a", "DET", "DT"),
//!             ],
//!             entities: vec![Entity::new("CARDINAL", "5")],
//!         },
//!         _ => Annotation::default(),
//!     })
//! };
//!
//! let scanner = SentenceScanner::new(default_lexicon(), tagger);
//! let result = scanner
//!     .scan(["Work Experience", "Managed a team of 5 people"])
//!     .unwrap();
//!
//! assert!(result.sentences[1].has_quantified_impact);
//! assert!(result.sentences[1].opens_with_action_verb);
//! ```

pub mod critique;
pub mod error;
pub mod lexicon;
pub mod links;
pub mod nlp;
pub mod result;
pub mod scanner;
pub mod section;
pub mod tally;
pub mod types;

pub use critique::{Critique, Finding};
pub use error::{LexiconError, Result, ScanError};
pub use lexicon::{default_lexicon, Lexicon};
pub use links::{check_links, LinkProbe, LinkReport, ProbeError};
pub use nlp::{AnnotatedDocument, Annotation, Entity, Tagger, TaggerError, Token};
pub use result::{PhoneCheck, ScanResult, SentenceRecord};
pub use scanner::{ActionVerbRule, ScanOptions, SentenceScanner, TaggerFailure, TrailingDates};
pub use section::SectionTracker;
pub use tally::TenseTally;
pub use types::Tense;
