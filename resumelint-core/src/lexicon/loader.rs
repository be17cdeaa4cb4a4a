use super::Lexicon;
use std::sync::OnceLock;

static DEFAULT_LEXICON: OnceLock<Lexicon> = OnceLock::new();

const DEFAULT_LEXICON_TOML: &str = include_str!("../../configs/lexicon/default.toml");

/// TOML source of the embedded default lexicon
pub fn default_lexicon_source() -> &'static str {
    DEFAULT_LEXICON_TOML
}

/// The embedded default lexicon, parsed once per process
pub fn default_lexicon() -> &'static Lexicon {
    DEFAULT_LEXICON.get_or_init(|| {
        Lexicon::from_toml_str(DEFAULT_LEXICON_TOML).expect("Failed to load embedded lexicon")
    })
}
