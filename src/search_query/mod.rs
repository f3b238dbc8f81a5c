mod filter;
mod grammar;
mod tokenizer;

use unicode_normalization::UnicodeNormalization;

pub use filter::SearchableFilter;
pub use grammar::{
    QueryLanguageVersion, IGNORED_VALUES, MODERN_SINCE, OPERATORS, SEPARATORS, STRIPPED_CHARS,
};
pub use tokenizer::Tokenizer;

/// Tokenizer and searchable-token filter for one grammar version.
///
/// Behavior:
/// - Never fails on any input; malformed syntax yields best-effort tokens
/// - Negation, `(` and `)` come out as their own tokens
/// - Quotes are consumed, their content becomes one token
/// - The filter keeps only free-text values, trimmed of `"`, `,`, `*`, `;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTokenizer {
    tokenizer: Tokenizer,
    filter: SearchableFilter,
}

impl SearchTokenizer {
    pub fn new(version: QueryLanguageVersion) -> Self {
        Self {
            tokenizer: Tokenizer::new(version),
            filter: SearchableFilter::new(version),
        }
    }

    pub fn version(&self) -> QueryLanguageVersion {
        self.tokenizer.version()
    }

    pub fn tokenize(&self, query: &str) -> Vec<String> {
        self.tokenizer.tokenize(query)
    }

    pub fn searchable_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.filter.searchable_tokens(tokens)
    }

    /// Convenience: tokenize + filter in one call.
    pub fn searchable_terms(&self, query: &str) -> Vec<String> {
        let tokens = self.tokenize(query);
        self.searchable_tokens(&tokens)
    }
}

impl Default for SearchTokenizer {
    fn default() -> Self {
        Self::new(QueryLanguageVersion::default())
    }
}

/// Canonical composition (NFC), applied to search-bar text before tokenizing.
pub fn normalize_query(query: &str) -> String {
    query.nfc().collect()
}

#[cfg(test)]
mod tests;
