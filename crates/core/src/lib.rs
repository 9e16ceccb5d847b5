//! Core types for the event intake agent
//!
//! This crate provides the foundational pieces shared by the extraction and
//! dialog crates:
//! - The session record (`EventRecord`) and its field enums
//! - The `Clock` abstraction for deterministic relative-date math
//! - Traits for the external date-search and named-entity services

pub mod clock;
pub mod record;
pub mod traits;

pub use clock::{Clock, FixedClock, SystemClock};
pub use record::{EventRecord, EventType, Scoring};
pub use traits::{DateCandidate, DateSearch, EntityRecognizer, NamedEntity, SearchOptions};
