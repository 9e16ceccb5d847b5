//! Session record and field enums

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known event types the intake flow understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Skateboard,
    Snowboard,
    Bmx,
    MusicFestival,
    FilmFestival,
    Debate,
}

impl EventType {
    /// All known types, in the order they are scanned during extraction.
    /// The order is behaviorally significant: ties and first-match rules
    /// follow it.
    pub const ALL: [EventType; 6] = [
        EventType::Skateboard,
        EventType::Snowboard,
        EventType::Bmx,
        EventType::MusicFestival,
        EventType::FilmFestival,
        EventType::Debate,
    ];

    /// Lowercase vocabulary phrase matched against utterances
    pub fn phrase(&self) -> &'static str {
        match self {
            EventType::Skateboard => "skateboard",
            EventType::Snowboard => "snowboard",
            EventType::Bmx => "bmx",
            EventType::MusicFestival => "music festival",
            EventType::FilmFestival => "film festival",
            EventType::Debate => "debate",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// How the event is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    Judges,
    Audience,
    Both,
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scoring::Judges => "judges",
            Scoring::Audience => "audience",
            Scoring::Both => "both",
        };
        f.write_str(s)
    }
}

/// Mutable session state: one optional slot per intake field.
///
/// Fill-once semantics: a slot that has been set is never overwritten by a
/// later utterance. `reset()` is the only way to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_type: Option<EventType>,
    pub contestant_count: Option<u32>,
    pub scoring: Option<Scoring>,
    pub date: Option<NaiveDate>,
}

impl EventRecord {
    /// Create an empty record at session start
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event type if still unset. Returns true when the slot was
    /// filled by this call.
    pub fn fill_event_type(&mut self, value: EventType) -> bool {
        if self.event_type.is_none() {
            self.event_type = Some(value);
            return true;
        }
        false
    }

    /// Set the contestant count if still unset
    pub fn fill_contestant_count(&mut self, value: u32) -> bool {
        if self.contestant_count.is_none() {
            self.contestant_count = Some(value);
            return true;
        }
        false
    }

    /// Set the scoring method if still unset
    pub fn fill_scoring(&mut self, value: Scoring) -> bool {
        if self.scoring.is_none() {
            self.scoring = Some(value);
            return true;
        }
        false
    }

    /// Set the event date if still unset
    pub fn fill_date(&mut self, value: NaiveDate) -> bool {
        if self.date.is_none() {
            self.date = Some(value);
            return true;
        }
        false
    }

    /// All four slots filled
    pub fn is_complete(&self) -> bool {
        self.event_type.is_some()
            && self.contestant_count.is_some()
            && self.scoring.is_some()
            && self.date.is_some()
    }

    /// Clear every slot (explicit restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render the record as the end-of-session summary block
    pub fn summary(&self) -> String {
        fn line<T: fmt::Display>(value: &Option<T>) -> String {
            match value {
                Some(v) => v.to_string(),
                None => "(unresolved)".to_string(),
            }
        }

        format!(
            "Event Type:        {}\n\
             Contestant Count:  {}\n\
             Scoring Method:    {}\n\
             Date:              {}",
            line(&self.event_type),
            line(&self.contestant_count),
            line(&self.scoring),
            line(&self.date),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_once() {
        let mut record = EventRecord::new();
        assert!(record.fill_event_type(EventType::Bmx));
        assert!(!record.fill_event_type(EventType::Debate));
        assert_eq!(record.event_type, Some(EventType::Bmx));
    }

    #[test]
    fn test_completion_and_reset() {
        let mut record = EventRecord::new();
        assert!(!record.is_complete());

        record.fill_event_type(EventType::MusicFestival);
        record.fill_contestant_count(20);
        record.fill_scoring(Scoring::Both);
        record.fill_date(NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
        assert!(record.is_complete());

        record.reset();
        assert_eq!(record, EventRecord::new());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = EventRecord::new();
        record.fill_event_type(EventType::FilmFestival);
        record.fill_scoring(Scoring::Audience);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("film_festival"));

        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_summary_shows_unresolved_fields() {
        let mut record = EventRecord::new();
        record.fill_contestant_count(12);

        let summary = record.summary();
        assert!(summary.contains("Contestant Count:  12"));
        assert!(summary.contains("Event Type:        (unresolved)"));
    }
}
