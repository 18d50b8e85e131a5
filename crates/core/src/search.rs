//! Search-term normalization.
//!
//! A query containing the word `OR` (any case, whole word) switches the
//! search to OR mode and has the keyword stripped out. Anything else is an
//! AND search over the text exactly as submitted. Splitting the remaining
//! text into individual keywords is left to the store.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ASCII word boundaries: a non-ASCII letter next to `OR` still delimits it.
static OR_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?-u:\b)OR(?-u:\b)").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// How the store combines the keywords of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Every keyword must match.
    #[default]
    And,
    /// Any keyword may match.
    Or,
}

impl SearchMode {
    /// SQL boolean operator joining per-keyword predicates.
    pub fn as_sql(self) -> &'static str {
        match self {
            SearchMode::And => "AND",
            SearchMode::Or => "OR",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A normalized search request ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub terms: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    /// Detect the `OR` keyword and clean up the term string.
    ///
    /// ```
    /// use gamecat_core::search::{SearchMode, SearchQuery};
    /// let q = SearchQuery::parse("zelda OR mario");
    /// assert_eq!(q.mode, SearchMode::Or);
    /// assert_eq!(q.terms, "zelda mario");
    /// ```
    pub fn parse(query: &str) -> Self {
        if !OR_KEYWORD_RE.is_match(query) {
            return Self {
                terms: query.to_string(),
                mode: SearchMode::And,
            };
        }

        let stripped = OR_KEYWORD_RE.replace_all(query, " ");
        let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");

        Self {
            terms: collapsed.trim().to_string(),
            mode: SearchMode::Or,
        }
    }
}
