//! Event intake agent
//!
//! Turn-based slot filling over the `EventRecord`: each utterance runs
//! through the field extractors, newly filled slots produce confirmation
//! messages, and the dialog policy picks the next prompt until the record
//! is complete.

pub mod dialog;
pub mod engine;
pub mod merge;

use thiserror::Error;

pub use dialog::next_prompt;
pub use engine::{DateStrategy, EngineConfig, EventAgent, TurnOutcome};
pub use merge::SlotMerger;

/// Construction-time failures. Extraction itself never errors; a field
/// that cannot be filled simply stays unresolved for the next turn.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("entity-guided date resolution requires a named-entity recognizer")]
    RecognizerMissing,
}
