//! Clock abstraction
//!
//! Relative date expressions ("next saturday") are resolved against a
//! reference instant. The clock is injected rather than read ambiently so
//! repeated runs against a fixed "now" are reproducible.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, used outside tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Pin the clock to midnight UTC on the given calendar date
    pub fn on_date(date: NaiveDate) -> Self {
        Self(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("valid midnight")))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
