use serde::{Deserialize, Serialize};

use crate::errors::VersionError;

/// First host release whose search bar uses the rewritten query language.
pub const MODERN_SINCE: (u32, u32, u32) = (2, 1, 24);

/// Field qualifiers shared by every grammar version.
const BASE_IGNORED_TAGS: &[&str] = &[
    // default query language
    "added:", "deck:", "note:", "tag:", "mid:", "nid:", "cid:", "card:", "is:", "flag:", "rated:",
    "dupe:", "prop:",
    // added by add-ons
    "seen:", "rid:",
];

const LEGACY_EXTRA_TAGS: &[&str] = &["re:", "nc:"];

const LEGACY_QUOTES: &[char] = &['"', '\''];
const MODERN_QUOTES: &[char] = &['"'];

/// Placeholder values that match anything.
pub const IGNORED_VALUES: &[&str] = &["*", "_", "_*"];

/// Boolean connectives, never content.
pub const OPERATORS: &[&str] = &["or", "and", "+"];

/// Punctuation trimmed from both ends of a searchable value.
pub const STRIPPED_CHARS: &[char] = &['"', ',', '*', ';'];

/// Token separators: ASCII space and ideographic space.
pub const SEPARATORS: &[char] = &[' ', '\u{3000}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLanguageVersion {
    /// Search bar of hosts older than 2.1.24.
    Legacy,
    /// Search bar of 2.1.24 and newer.
    #[default]
    Modern,
}

impl QueryLanguageVersion {
    /// Resolves the grammar from a dotted host version like `2.1.24`.
    ///
    /// Missing components count as zero, so `2.1` is `2.1.0`.
    pub fn for_host_version(version: &str) -> Result<Self, VersionError> {
        let parsed = parse_version(version)?;
        let resolved = if parsed >= MODERN_SINCE {
            Self::Modern
        } else {
            Self::Legacy
        };
        log::debug!("host version {version} resolves to {resolved:?} query language");
        Ok(resolved)
    }

    pub fn quotes(&self) -> &'static [char] {
        match self {
            Self::Legacy => LEGACY_QUOTES,
            Self::Modern => MODERN_QUOTES,
        }
    }

    /// Field-qualifier prefixes whose values are not free text, in table order.
    pub fn ignored_tags(&self) -> Vec<&'static str> {
        let mut tags = BASE_IGNORED_TAGS.to_vec();
        if *self == Self::Legacy {
            tags.extend_from_slice(LEGACY_EXTRA_TAGS);
        }
        tags
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quotes().contains(&c)
    }
}

impl std::fmt::Display for QueryLanguageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

impl std::str::FromStr for QueryLanguageVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "modern" => Ok(Self::Modern),
            other => Err(VersionError::UnknownGrammar(other.to_string())),
        }
    }
}

fn parse_version(version: &str) -> Result<(u32, u32, u32), VersionError> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(VersionError::Empty);
    }

    let mut parts = [0u32; 3];
    for (idx, part) in trimmed.split('.').enumerate() {
        if idx >= parts.len() {
            return Err(VersionError::malformed(version));
        }
        parts[idx] = part.parse().map_err(|_| VersionError::malformed(version))?;
    }

    Ok((parts[0], parts[1], parts[2]))
}
