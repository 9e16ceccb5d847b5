//! Traits for the external language services
//!
//! The date-search engine and the named-entity recognizer are consumed as
//! black boxes. These traits document the contract the extraction layer
//! relies on; real bindings and test doubles both live behind them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settings passed through to the date-search engine on every call
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// When a date is ambiguous between a past and future occurrence,
    /// resolve to the nearer future one
    pub prefer_future: bool,
    /// Reference instant for relative expressions ("next saturday")
    pub relative_base: DateTime<Utc>,
}

/// One match from a free-text date search: the span of input text that was
/// recognized, and the instant it resolved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateCandidate {
    pub span: String,
    pub instant: DateTime<Utc>,
}

impl DateCandidate {
    pub fn new(span: impl Into<String>, instant: DateTime<Utc>) -> Self {
        Self {
            span: span.into(),
            instant,
        }
    }

    /// A span that is nothing but digits is a stray number, not a date
    pub fn is_bare_number(&self) -> bool {
        let trimmed = self.span.trim();
        !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
    }
}

/// Free-text date search and absolute parsing
///
/// Candidate ordering is implementation-defined but must be stable; callers
/// consume it in order. A miss is an empty result, never an error.
pub trait DateSearch: Send + Sync {
    /// Find date expressions anywhere in `text`
    fn search(&self, text: &str, opts: SearchOptions) -> Vec<DateCandidate>;

    /// Parse `text` as a single date expression, or nothing
    fn parse_absolute(&self, text: &str, opts: SearchOptions) -> Option<DateTime<Utc>>;
}

/// A labeled span from the named-entity recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: String,
}

impl NamedEntity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    pub fn is_date(&self) -> bool {
        self.label == "DATE"
    }
}

/// Named-entity recognition over raw utterance text
pub trait EntityRecognizer: Send + Sync {
    fn extract_entities(&self, text: &str) -> Vec<NamedEntity>;
}
