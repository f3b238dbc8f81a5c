use super::grammar::{QueryLanguageVersion, SEPARATORS};

/// Splits a search-bar query into tokens.
///
/// Never fails: unterminated quotes run to the end of input and unmatched
/// parens are emitted as plain tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    version: QueryLanguageVersion,
}

impl Tokenizer {
    pub fn new(version: QueryLanguageVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> QueryLanguageVersion {
        self.version
    }

    pub fn tokenize(&self, query: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        let mut token = String::new();
        // the quote char that opened the current span
        let mut in_quote: Option<char> = None;

        for c in query.chars() {
            if self.version.is_quote(c) {
                match in_quote {
                    Some(open) if open == c => in_quote = None,
                    Some(_) => token.push(c),
                    // quotes may start directly after a field qualifier
                    None if token.ends_with(':') => in_quote = Some(c),
                    None if !token.is_empty() => token.push(c),
                    None => in_quote = Some(c),
                }
                continue;
            }

            match c {
                c if SEPARATORS.contains(&c) => {
                    if in_quote.is_some() {
                        token.push(c);
                    } else {
                        flush(&mut tokens, &mut token);
                    }
                }
                '(' | ')' => {
                    if in_quote.is_some() {
                        token.push(c);
                    } else {
                        flush(&mut tokens, &mut token);
                        tokens.push(c.to_string());
                    }
                }
                '-' => {
                    if !token.is_empty() {
                        token.push(c);
                    } else if tokens.last().map(String::as_str) != Some("-") {
                        tokens.push("-".to_string());
                    }
                }
                _ => token.push(c),
            }
        }

        flush(&mut tokens, &mut token);

        log::debug!(
            "tokenized query into {} tokens ({} grammar)",
            tokens.len(),
            self.version
        );
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(QueryLanguageVersion::default())
    }
}

fn flush(tokens: &mut Vec<String>, token: &mut String) {
    if !token.is_empty() {
        tokens.push(std::mem::take(token));
    }
}
