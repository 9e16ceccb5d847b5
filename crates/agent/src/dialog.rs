//! Dialog policy
//!
//! Pure function of the record: prompt for the first unresolved field in
//! fixed priority order, or nothing once every slot is filled.

use event_agent_core::EventRecord;

pub const EVENT_TYPE_PROMPT: &str =
    "What type of event are you hosting? (e.g., skateboard, music festival)";
pub const CONTESTANT_COUNT_PROMPT: &str = "How many contestants will there be?";
pub const SCORING_PROMPT: &str = "How will scoring work? (judges, audience, or both)";
pub const DATE_PROMPT: &str = "When is the event? (e.g., 'next Saturday', 'Dec 20th')";

/// Next question to ask, or `None` when the record is complete
pub fn next_prompt(record: &EventRecord) -> Option<&'static str> {
    if record.event_type.is_none() {
        return Some(EVENT_TYPE_PROMPT);
    }
    if record.contestant_count.is_none() {
        return Some(CONTESTANT_COUNT_PROMPT);
    }
    if record.scoring.is_none() {
        return Some(SCORING_PROMPT);
    }
    if record.date.is_none() {
        return Some(DATE_PROMPT);
    }
    None
}
