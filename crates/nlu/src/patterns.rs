//! Compiled pattern set shared across extractors
//!
//! The contestant-count phrase set is used twice: by the count extractor to
//! capture the number, and by the date resolver to strip the same phrase
//! out before date parsing so the number cannot be misread as a
//! day-of-month. "peple" stays in the set; it is a misspelling that shows
//! up in real transcripts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Integer followed by a count-indicating noun or verb phrase
pub static COUNT_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:contestants|participants|people|peple|entries|to compete|will compete)")
        .expect("valid count phrase regex")
});

/// Whole utterance is a single integer (bare answer to the count prompt)
pub static BARE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)$").expect("valid bare number regex"));

/// Judge-scoring cue words
pub static SCORING_CUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"judges|final say").expect("valid scoring cue regex"));

/// "10 judges" style phrases: a head count near "judges", not a scoring cue
pub static NUMERIC_JUDGES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s+judges").expect("valid numeric judges regex"));

/// Keywords that hint at a date the direct search may have missed.
/// Scanned in this order; the first keyword present in the utterance picks
/// the fallback window.
pub const DATE_KEYWORDS: &[&str] = &[
    "christmas",
    "easter",
    "new year",
    "weekend",
    "saturday",
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "jan",
    "feb",
    "mar",
    "apr",
    "may",
    "jun",
    "jul",
    "aug",
    "sep",
    "oct",
    "nov",
    "dec",
];

/// Lowercase the text and blank out noise-number phrases (contestant counts
/// and "N judges") so the date search never sees them.
pub fn strip_noise_numbers(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_counts = COUNT_PHRASE_RE.replace_all(&lowered, " ");
    NUMERIC_JUDGES_RE
        .replace_all(&without_counts, " ")
        .into_owned()
}
