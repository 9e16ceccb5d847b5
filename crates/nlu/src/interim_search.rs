//! `interim` binding for the `DateSearch` trait
//!
//! `interim` parses one English date expression at a time rather than
//! searching inside free text, so `search` reports at most a single
//! candidate spanning the trimmed input. That is enough for the keyword
//! fallback and entity-guided pipelines, which already confine the text
//! before searching. Bare weekday and month expressions resolve forward
//! from the reference instant, which lines up with the future-preference
//! contract.

use chrono::{DateTime, Utc};
use interim::{parse_date_string, Dialect};

use event_agent_core::{DateCandidate, DateSearch, SearchOptions};

#[derive(Debug, Clone, Copy, Default)]
pub struct InterimDateSearch;

impl DateSearch for InterimDateSearch {
    fn search(&self, text: &str, opts: SearchOptions) -> Vec<DateCandidate> {
        let trimmed = text.trim();
        match parse_date_string(trimmed, opts.relative_base, Dialect::Us) {
            Ok(instant) => vec![DateCandidate::new(trimmed, instant)],
            Err(_) => Vec::new(),
        }
    }

    fn parse_absolute(&self, text: &str, opts: SearchOptions) -> Option<DateTime<Utc>> {
        parse_date_string(text.trim(), opts.relative_base, Dialect::Us).ok()
    }
}
