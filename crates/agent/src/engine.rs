//! Engine configuration and construction
//!
//! The date-resolution strategy is the one customization point exposed to
//! callers: pick it here, at construction, and the rest of the turn loop is
//! identical for both pipelines.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use event_agent_core::{Clock, DateSearch, EntityRecognizer, EventRecord};
use event_agent_nlu::{
    DateResolver, EntityDateResolver, EventTypeExtractor, SearchDateResolver,
};

use crate::dialog;
use crate::merge::SlotMerger;
use crate::AgentError;

/// Which date-resolution pipeline the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStrategy {
    /// Direct search over noise-cleaned text, keyword-windowed retry on miss
    #[default]
    SearchWithFallback,
    /// Named-entity recognition, then per-entity absolute parse and search
    EntityGuided,
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Date-resolution pipeline
    #[serde(default)]
    pub date_strategy: DateStrategy,

    /// Slack between a negation cue and the event-type phrase it negates
    #[serde(default = "default_negation_lookback")]
    pub negation_lookback: usize,

    /// Window radius for the keyword fallback search
    #[serde(default = "default_fallback_window")]
    pub fallback_window: usize,

    /// Log every extractor outcome at debug level
    #[serde(default)]
    pub trace_extraction: bool,
}

fn default_negation_lookback() -> usize {
    EventTypeExtractor::DEFAULT_LOOKBACK
}

fn default_fallback_window() -> usize {
    SearchDateResolver::DEFAULT_WINDOW_RADIUS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            date_strategy: DateStrategy::default(),
            negation_lookback: default_negation_lookback(),
            fallback_window: default_fallback_window(),
            trace_extraction: false,
        }
    }
}

/// Result of one processed utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// One confirmation per slot newly filled this turn
    pub feedback: Vec<String>,
    /// Prompt for the first still-unresolved field
    pub next_prompt: Option<String>,
    /// All four slots filled
    pub complete: bool,
}

/// Turn-based intake agent owning one session record
pub struct EventAgent {
    merger: SlotMerger,
    record: EventRecord,
}

impl EventAgent {
    /// Build an agent for the configured strategy. `EntityGuided` without a
    /// recognizer is the one fatal condition: the pipeline has no partial
    /// behavior without it, so construction fails instead of degrading.
    pub fn new(
        config: EngineConfig,
        search: Arc<dyn DateSearch>,
        recognizer: Option<Arc<dyn EntityRecognizer>>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AgentError> {
        let resolver: Arc<dyn DateResolver> = match config.date_strategy {
            DateStrategy::SearchWithFallback => Arc::new(
                SearchDateResolver::new(search, clock)
                    .with_window_radius(config.fallback_window),
            ),
            DateStrategy::EntityGuided => {
                let recognizer = recognizer.ok_or(AgentError::RecognizerMissing)?;
                Arc::new(EntityDateResolver::new(search, recognizer, clock))
            }
        };

        let merger = SlotMerger::new(
            EventTypeExtractor::new(config.negation_lookback),
            resolver,
        )
        .with_trace(config.trace_extraction);

        debug!(strategy = ?config.date_strategy, "event agent ready");
        Ok(Self {
            merger,
            record: EventRecord::new(),
        })
    }

    /// Process one utterance fully: extractors, slot merge, next prompt
    pub fn handle_utterance(&mut self, text: &str) -> TurnOutcome {
        let feedback = self.merger.apply(text, &mut self.record);
        let next_prompt = dialog::next_prompt(&self.record).map(str::to_string);

        TurnOutcome {
            complete: next_prompt.is_none(),
            feedback,
            next_prompt,
        }
    }

    /// Current session record
    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    /// Discard the session record and start over
    pub fn reset(&mut self) {
        self.record.reset();
    }
}
