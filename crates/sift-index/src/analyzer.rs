//! Product name analysis.
//!
//! Names are split on non-alphanumerics, lowercased, stripped of tokens over 40 bytes and
//! stemmed. The stemmer comes from `index.stemmer`. Indexing, query text and highlight
//! span detection all share this analyzer, so they agree on token boundaries.

use tantivy::tokenizer::{
    Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer, TextAnalyzer, TokenStream,
};

use crate::IndexError;

/// Tokenizer name the product schema refers to.
pub const SIFT_TOKENIZER: &str = "sift_text";

/// Tokens longer than this many bytes are dropped.
const MAX_TOKEN_LENGTH: usize = 40;

/// Stemmer languages by configuration name.
const LANGUAGES: &[(&str, Language)] = &[
    ("arabic", Language::Arabic),
    ("danish", Language::Danish),
    ("dutch", Language::Dutch),
    ("english", Language::English),
    ("finnish", Language::Finnish),
    ("french", Language::French),
    ("german", Language::German),
    ("greek", Language::Greek),
    ("hungarian", Language::Hungarian),
    ("italian", Language::Italian),
    ("norwegian", Language::Norwegian),
    ("portuguese", Language::Portuguese),
    ("romanian", Language::Romanian),
    ("russian", Language::Russian),
    ("spanish", Language::Spanish),
    ("swedish", Language::Swedish),
    ("tamil", Language::Tamil),
    ("turkish", Language::Turkish),
];

/// Looks up a stemmer language by name, ignoring case.
pub fn parse_language(name: &str) -> Result<Language, IndexError> {
    LANGUAGES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, language)| language)
        .ok_or_else(|| IndexError::InvalidLanguage(name.to_lowercase()))
}

/// The product name analyzer for `language`.
pub fn build_analyzer(language: Language) -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .filter(Stemmer::new(language))
        .build()
}

/// [`build_analyzer`] for a configured language name.
pub fn build_analyzer_from_name(language_name: &str) -> Result<TextAnalyzer, IndexError> {
    parse_language(language_name).map(build_analyzer)
}

/// Distinct analyzed tokens of `text`, in order of first appearance.
pub fn analyze(analyzer: &TextAnalyzer, text: &str) -> Vec<String> {
    let mut analyzer = analyzer.clone();
    let mut stream = analyzer.token_stream(text);
    let mut tokens: Vec<String> = Vec::new();
    while stream.advance() {
        let token = &stream.token().text;
        if !tokens.contains(token) {
            tokens.push(token.clone());
        }
    }
    tokens
}
