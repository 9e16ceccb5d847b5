//! Entity extraction for the event intake agent
//!
//! Four independent, stateless extractors (event type, contestant count,
//! scoring method, date) map raw utterance text to optional typed values.
//! The date extractor is the hard one: it escalates through strategies of
//! increasing cost (noise-cleaned direct search, keyword-windowed fallback,
//! entity-guided parse) behind a single `DateResolver` interface.

pub mod date;
pub mod extractors;
pub mod patterns;

#[cfg(feature = "interim")]
pub mod interim_search;

pub use date::{DateResolver, EntityDateResolver, SearchDateResolver};
pub use extractors::{extract_contestant_count, extract_scoring, EventTypeExtractor};

#[cfg(feature = "interim")]
pub use interim_search::InterimDateSearch;
