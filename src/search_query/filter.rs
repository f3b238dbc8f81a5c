use super::grammar::{QueryLanguageVersion, IGNORED_VALUES, OPERATORS, STRIPPED_CHARS};

/// Picks the tokens that are literal search content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableFilter {
    ignored_tags: Vec<&'static str>,
}

impl SearchableFilter {
    pub fn new(version: QueryLanguageVersion) -> Self {
        Self {
            ignored_tags: version.ignored_tags(),
        }
    }

    /// Drops operators, negated terms, field qualifiers and wildcard-only
    /// values, then trims leftover punctuation from what survives.
    ///
    /// Values that become empty after trimming are still returned.
    pub fn searchable_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let values: Vec<String> = tokens
            .iter()
            .filter_map(|token| self.searchable_value(token.as_ref()))
            .map(|value| value.trim_matches(STRIPPED_CHARS).to_string())
            .collect();

        log::debug!(
            "{} of {} tokens are searchable",
            values.len(),
            tokens.len()
        );
        values
    }

    fn searchable_value<'a>(&self, token: &'a str) -> Option<&'a str> {
        if OPERATORS.contains(&token)
            || token.starts_with('-')
            || self.ignored_tags.iter().any(|tag| token.starts_with(tag))
        {
            return None;
        }

        match token.split_once(':') {
            Some((_, value)) if value.is_empty() || IGNORED_VALUES.contains(&value) => None,
            Some((_, value)) => Some(value),
            None => Some(token),
        }
    }
}

impl Default for SearchableFilter {
    fn default() -> Self {
        Self::new(QueryLanguageVersion::default())
    }
}
