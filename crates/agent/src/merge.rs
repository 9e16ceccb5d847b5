//! Slot merging
//!
//! Applies the four extractors to an utterance against the current record.
//! Only unset fields are examined; a slot that filled once never changes
//! again, so repeat application of the same utterance is a no-op.

use std::sync::Arc;

use tracing::debug;

use event_agent_core::EventRecord;
use event_agent_nlu::{
    extract_contestant_count, extract_scoring, DateResolver, EventTypeExtractor,
};

pub struct SlotMerger {
    event_type: EventTypeExtractor,
    date: Arc<dyn DateResolver>,
    trace: bool,
}

impl SlotMerger {
    pub fn new(event_type: EventTypeExtractor, date: Arc<dyn DateResolver>) -> Self {
        Self {
            event_type,
            date,
            trace: false,
        }
    }

    /// Log each extractor outcome at debug level
    pub fn with_trace(mut self, on: bool) -> Self {
        self.trace = on;
        self
    }

    /// Run every extractor whose field is still unset, mutating the record
    /// in place. Returns one confirmation message per newly filled slot.
    pub fn apply(&self, text: &str, record: &mut EventRecord) -> Vec<String> {
        let mut feedback = Vec::new();

        if record.event_type.is_none() {
            match self.event_type.extract(text) {
                Some(ty) => {
                    record.fill_event_type(ty);
                    feedback.push(format!("Okay, a {ty} event. Got it."));
                }
                None if self.trace => debug!("no event type in utterance"),
                None => {}
            }
        }

        if record.contestant_count.is_none() {
            match extract_contestant_count(text) {
                Some(count) => {
                    record.fill_contestant_count(count);
                    feedback.push(format!("{count} contestants. Check."));
                }
                None if self.trace => debug!("no contestant count in utterance"),
                None => {}
            }
        }

        if record.scoring.is_none() {
            match extract_scoring(text) {
                Some(scoring) => {
                    record.fill_scoring(scoring);
                    feedback.push(format!("Scoring by {scoring}. Noted."));
                }
                None if self.trace => debug!("no scoring method in utterance"),
                None => {}
            }
        }

        if record.date.is_none() {
            match self.date.resolve(text) {
                Some(date) => {
                    record.fill_date(date);
                    feedback.push(format!("Set for {date}. Great."));
                }
                None if self.trace => debug!("no date in utterance"),
                None => {}
            }
        }

        feedback
    }
}
