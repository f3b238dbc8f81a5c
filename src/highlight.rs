use crate::{
    config::Config,
    search_query::{normalize_query, QueryLanguageVersion, SearchTokenizer},
};

/// The host's find-in-page primitive. An empty string clears highlights.
pub trait Highlighter {
    fn find_text(&mut self, text: &str);
}

pub fn highlight_terms<H: Highlighter + ?Sized>(highlighter: &mut H, terms: &[String]) {
    for term in terms {
        highlighter.find_text(term);
    }
}

pub fn clear_highlights<H: Highlighter + ?Sized>(highlighter: &mut H) {
    highlighter.find_text("");
}

/// Per-window highlighting state.
#[derive(Debug, Clone)]
pub struct HighlightSession {
    enabled: bool,
    tokenizer: SearchTokenizer,
    ignored_queries: Vec<String>,
}

impl HighlightSession {
    pub fn new(config: &Config, version: QueryLanguageVersion) -> Self {
        Self {
            enabled: config.highlight_by_default,
            tokenizer: SearchTokenizer::new(version),
            ignored_queries: config
                .ignored_queries
                .iter()
                .map(|q| normalize_query(q))
                .collect(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Terms of `query` that would be highlighted, without touching the host.
    pub fn terms(&self, query: &str) -> Vec<String> {
        let query = normalize_query(query);
        if query.is_empty() || self.ignored_queries.contains(&query) {
            return Vec::new();
        }
        self.tokenizer.searchable_terms(&query)
    }

    /// Highlights the searchable terms of `query` and returns them.
    ///
    /// Does nothing while the session is disabled.
    pub fn highlight<H: Highlighter + ?Sized>(&self, query: &str, highlighter: &mut H) -> Vec<String> {
        if !self.enabled {
            return Vec::new();
        }

        let terms = self.terms(query);
        if !terms.is_empty() {
            log::debug!("highlighting {} terms", terms.len());
            highlight_terms(highlighter, &terms);
        }
        terms
    }

    /// Turns highlighting on or off; turning it off clears the page and
    /// turning it on re-highlights `query`.
    pub fn toggle<H: Highlighter + ?Sized>(&mut self, enabled: bool, query: &str, highlighter: &mut H) {
        self.enabled = enabled;
        if enabled {
            self.highlight(query, highlighter);
        } else {
            clear_highlights(highlighter);
        }
    }
}
