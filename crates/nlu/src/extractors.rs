//! Field extractors for event type, contestant count and scoring
//!
//! Each extractor is a stateless map from raw utterance text to an optional
//! typed value. Malformed input is never an error: no match means `None`,
//! and ambiguity (two competing candidates for a single-valued field) also
//! means `None` rather than an arbitrary pick.

use event_agent_core::{EventType, Scoring};
use regex::Regex;
use tracing::debug;

use crate::patterns::{BARE_NUMBER_RE, COUNT_PHRASE_RE, NUMERIC_JUDGES_RE, SCORING_CUE_RE};

/// Event-type extraction with negation filtering.
///
/// A vocabulary phrase found in the utterance is discarded when a negation
/// cue ("not", "don't like", "no") occurs shortly before it. The lookback
/// gap between cue and phrase is configurable; multi-clause sentences can
/// defeat a short gap, so callers may widen it.
pub struct EventTypeExtractor {
    negations: Vec<(EventType, Regex)>,
}

impl EventTypeExtractor {
    /// Default slack (in characters) allowed between a negation cue and the
    /// event-type phrase it negates
    pub const DEFAULT_LOOKBACK: usize = 10;

    pub fn new(negation_lookback: usize) -> Self {
        let negations = EventType::ALL
            .iter()
            .map(|ty| {
                let pattern = format!(
                    r"(?:not|don't like|no)\s+.{{0,{}}}{}",
                    negation_lookback,
                    regex::escape(ty.phrase())
                );
                let regex = Regex::new(&pattern).expect("valid negation regex");
                (*ty, regex)
            })
            .collect();

        Self { negations }
    }

    /// Return the single non-negated event type mentioned, if exactly one
    pub fn extract(&self, text: &str) -> Option<EventType> {
        let text = text.to_lowercase();

        let mut found = Vec::new();
        for (ty, negation) in &self.negations {
            if text.contains(ty.phrase()) {
                if negation.is_match(&text) {
                    debug!(event_type = %ty, "candidate ruled out by negation cue");
                } else {
                    found.push(*ty);
                }
            }
        }

        match found.as_slice() {
            [one] => Some(*one),
            [] => None,
            _ => {
                debug!(candidates = found.len(), "ambiguous event type, not guessing");
                None
            }
        }
    }
}

impl Default for EventTypeExtractor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOOKBACK)
    }
}

/// Extract the contestant count.
///
/// First match of an integer followed by a count phrase wins; failing that,
/// an utterance that is nothing but an integer is taken as a direct answer
/// to the count prompt.
pub fn extract_contestant_count(text: &str) -> Option<u32> {
    let text = text.to_lowercase();

    if let Some(caps) = COUNT_PHRASE_RE.captures(&text) {
        return caps[1].parse().ok();
    }

    BARE_NUMBER_RE
        .captures(text.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Extract the scoring method from two independent signals.
///
/// "judges" / "final say" counts as a judge signal unless the utterance
/// contains an "N judges" phrase anywhere, which marks the word as a head
/// count rather than a scoring cue. The literal word "both" forces `Both`
/// regardless of what the per-signal checks concluded.
pub fn extract_scoring(text: &str) -> Option<Scoring> {
    let text = text.to_lowercase();

    let has_judges = SCORING_CUE_RE.is_match(&text) && !NUMERIC_JUDGES_RE.is_match(&text);
    let has_audience = text.contains("audience");
    debug!(has_judges, has_audience, "scoring signals");

    if (has_judges && has_audience) || text.contains("both") {
        return Some(Scoring::Both);
    }
    if has_judges {
        return Some(Scoring::Judges);
    }
    if has_audience {
        return Some(Scoring::Audience);
    }
    None
}
