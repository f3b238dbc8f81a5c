//! Search-query tokenizer and searchable-term filter for highlighting card
//! browser search results.
//!
//! ```
//! use hsr::search_query::{QueryLanguageVersion, SearchTokenizer};
//!
//! let tokenizer = SearchTokenizer::new(QueryLanguageVersion::Modern);
//! assert_eq!(tokenizer.tokenize("one -two"), vec!["one", "-", "two"]);
//! assert_eq!(tokenizer.searchable_terms("deck:foo bar*"), vec!["bar"]);
//! ```

pub mod config;
pub mod errors;
pub mod highlight;
pub mod search_query;
pub mod selection;
pub mod storage;
