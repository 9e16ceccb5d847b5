//! Tiered date resolution
//!
//! Two interchangeable resolver pipelines sit behind the `DateResolver`
//! trait:
//!
//! - `SearchDateResolver`: direct free-text search over noise-cleaned text,
//!   then a keyword-windowed retry over the original text when the direct
//!   pass finds nothing usable.
//! - `EntityDateResolver`: named-entity recognition over the original text,
//!   with an absolute parse and then a confined search per DATE entity.
//!
//! Which pipeline runs is a construction-time choice of the engine, not a
//! structural one; both reduce to a single calendar date or nothing.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use event_agent_core::{Clock, DateSearch, EntityRecognizer, SearchOptions};

use crate::patterns::{strip_noise_numbers, DATE_KEYWORDS};

/// Resolve an utterance to a calendar date, or nothing
pub trait DateResolver: Send + Sync {
    fn resolve(&self, text: &str) -> Option<NaiveDate>;
}

/// Direct search with keyword-windowed fallback
pub struct SearchDateResolver {
    search: Arc<dyn DateSearch>,
    clock: Arc<dyn Clock>,
    window_radius: usize,
}

impl SearchDateResolver {
    /// Characters taken either side of a fallback keyword's start position
    pub const DEFAULT_WINDOW_RADIUS: usize = 30;

    pub fn new(search: Arc<dyn DateSearch>, clock: Arc<dyn Clock>) -> Self {
        Self {
            search,
            clock,
            window_radius: Self::DEFAULT_WINDOW_RADIUS,
        }
    }

    pub fn with_window_radius(mut self, radius: usize) -> Self {
        self.window_radius = radius;
        self
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            prefer_future: true,
            relative_base: self.clock.now(),
        }
    }

    /// Direct pass: search the noise-cleaned text, skipping spans that are
    /// just stray numbers
    fn direct(&self, cleaned: &str, opts: SearchOptions) -> Option<NaiveDate> {
        for candidate in self.search.search(cleaned, opts) {
            if candidate.is_bare_number() {
                debug!(span = %candidate.span, "skipping bare-number candidate");
                continue;
            }
            debug!(span = %candidate.span, "direct search hit");
            return Some(candidate.instant.date_naive());
        }
        None
    }

    /// Fallback pass: find a date-suggestive keyword in the original text and
    /// re-run the search confined to a window around it. Keywords are tried
    /// in fixed list order; a keyword whose window yields nothing does not
    /// stop the scan.
    fn keyword_fallback(&self, original: &str, opts: SearchOptions) -> Option<NaiveDate> {
        let text = original.to_lowercase();

        for keyword in DATE_KEYWORDS {
            let Some(pos) = text.find(keyword) else {
                continue;
            };

            let window = char_window(&text, pos, self.window_radius);
            debug!(keyword, window, "retrying date search in keyword window");

            if let Some(first) = self.search.search(window, opts).into_iter().next() {
                debug!(span = %first.span, "fallback search hit");
                return Some(first.instant.date_naive());
            }
        }

        None
    }
}

impl DateResolver for SearchDateResolver {
    fn resolve(&self, text: &str) -> Option<NaiveDate> {
        let opts = self.options();
        let cleaned = strip_noise_numbers(text);
        debug!(%cleaned, "date search input after noise strip");

        self.direct(&cleaned, opts)
            .or_else(|| self.keyword_fallback(text, opts))
    }
}

/// Entity-guided resolution: absolute parse first, confined search second,
/// per DATE entity in document order
pub struct EntityDateResolver {
    search: Arc<dyn DateSearch>,
    recognizer: Arc<dyn EntityRecognizer>,
    clock: Arc<dyn Clock>,
}

impl EntityDateResolver {
    pub fn new(
        search: Arc<dyn DateSearch>,
        recognizer: Arc<dyn EntityRecognizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            search,
            recognizer,
            clock,
        }
    }
}

impl DateResolver for EntityDateResolver {
    fn resolve(&self, text: &str) -> Option<NaiveDate> {
        let opts = SearchOptions {
            prefer_future: true,
            relative_base: self.clock.now(),
        };

        for entity in self.recognizer.extract_entities(text) {
            if !entity.is_date() {
                continue;
            }

            if let Some(instant) = self.search.parse_absolute(&entity.text, opts) {
                debug!(entity = %entity.text, "absolute parse hit");
                return Some(instant.date_naive());
            }

            debug!(entity = %entity.text, "absolute parse missed, searching entity text");
            if let Some(first) = self.search.search(&entity.text, opts).into_iter().next() {
                return Some(first.instant.date_naive());
            }
        }

        None
    }
}

/// Slice `radius` bytes either side of `pos`, snapped outward to char
/// boundaries so multi-byte input cannot split a code point
fn char_window(text: &str, pos: usize, radius: usize) -> &str {
    let mut start = pos.saturating_sub(radius);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }

    let mut end = (pos + radius).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }

    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use chrono::{DateTime, TimeZone, Utc};
    use event_agent_core::{DateCandidate, FixedClock, NamedEntity};

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn frozen_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::on_date(date(2025, 10, 29)))
    }

    /// Replays a fixed sequence of search responses and records every call
    struct ScriptedSearch {
        responses: Mutex<VecDeque<Vec<DateCandidate>>>,
        queries: Mutex<Vec<String>>,
        opts_seen: Mutex<Vec<SearchOptions>>,
    }

    impl ScriptedSearch {
        fn new(responses: Vec<Vec<DateCandidate>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                queries: Mutex::new(Vec::new()),
                opts_seen: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl DateSearch for ScriptedSearch {
        fn search(&self, text: &str, opts: SearchOptions) -> Vec<DateCandidate> {
            self.queries.lock().unwrap().push(text.to_string());
            self.opts_seen.lock().unwrap().push(opts);
            self.responses.lock().unwrap().pop_front().unwrap_or_default()
        }

        fn parse_absolute(&self, _text: &str, _opts: SearchOptions) -> Option<DateTime<Utc>> {
            None
        }
    }

    /// Exact-text lookup tables for the entity-guided pipeline
    struct TableSearch {
        absolute: HashMap<String, DateTime<Utc>>,
        searched: HashMap<String, Vec<DateCandidate>>,
    }

    impl DateSearch for TableSearch {
        fn search(&self, text: &str, _opts: SearchOptions) -> Vec<DateCandidate> {
            self.searched.get(text).cloned().unwrap_or_default()
        }

        fn parse_absolute(&self, text: &str, _opts: SearchOptions) -> Option<DateTime<Utc>> {
            self.absolute.get(text).copied()
        }
    }

    struct StaticEntities(Vec<NamedEntity>);

    impl EntityRecognizer for StaticEntities {
        fn extract_entities(&self, _text: &str) -> Vec<NamedEntity> {
            self.0.clone()
        }
    }

    #[test]
    fn test_direct_search_skips_bare_numbers() {
        let search = Arc::new(ScriptedSearch::new(vec![vec![
            DateCandidate::new("10", instant(2025, 11, 10)),
            DateCandidate::new("the 12th of december", instant(2025, 12, 12)),
        ]]));
        let resolver = SearchDateResolver::new(search.clone(), frozen_clock());

        let resolved = resolver.resolve(
            "I need 10 judges for my snowboard event on the 12th of December. \
             20 contestants will be there.",
        );
        assert_eq!(resolved, Some(date(2025, 12, 12)));

        // The search input must have had both noise numbers stripped
        let queries = search.queries();
        assert!(!queries[0].contains("10 judges"));
        assert!(!queries[0].contains("20 contestants"));
        assert!(queries[0].contains("the 12th of december"));
    }

    #[test]
    fn test_search_options_pin_future_and_base() {
        let search = Arc::new(ScriptedSearch::new(vec![vec![DateCandidate::new(
            "tomorrow",
            instant(2025, 10, 30),
        )]]));
        let resolver = SearchDateResolver::new(search.clone(), frozen_clock());

        assert_eq!(resolver.resolve("tomorrow"), Some(date(2025, 10, 30)));

        let opts = search.opts_seen.lock().unwrap()[0];
        assert!(opts.prefer_future);
        assert_eq!(opts.relative_base, instant(2025, 10, 29));
    }

    #[test]
    fn test_fallback_window_when_direct_misses() {
        // Direct pass over the cleaned text finds nothing; the christmas
        // keyword picks a +/-30 char window of the original text.
        let search = Arc::new(ScriptedSearch::new(vec![
            vec![],
            vec![DateCandidate::new(
                "the weekend before christmas",
                instant(2025, 12, 20),
            )],
        ]));
        let resolver = SearchDateResolver::new(search.clone(), frozen_clock());

        let resolved = resolver.resolve(
            "I'm running a music festival with 20 contestants on the weekend \
             before christmas. We should use both judges and the audience.",
        );
        assert_eq!(resolved, Some(date(2025, 12, 20)));

        let queries = search.queries();
        assert_eq!(queries.len(), 2);
        let window = &queries[1];
        assert!(window.contains("weekend before christmas"));
        // 30 chars before the keyword start reaches back into
        // "contestants" but no further
        assert!(!window.contains("music festival"));
        assert!(window.len() <= 30 + "christmas".len() + 30);
    }

    #[test]
    fn test_fallback_when_direct_yields_only_digits() {
        let search = Arc::new(ScriptedSearch::new(vec![
            vec![DateCandidate::new("8", instant(2025, 11, 8))],
            vec![DateCandidate::new("friday", instant(2025, 10, 31))],
        ]));
        let resolver = SearchDateResolver::new(search.clone(), frozen_clock());

        let resolved = resolver.resolve("on the 8th, maybe friday");
        assert_eq!(resolved, Some(date(2025, 10, 31)));
    }

    #[test]
    fn test_fallback_scans_keywords_in_list_order() {
        // "weekend" precedes "saturday" in the keyword list even though
        // "saturday" appears first in the text; its empty window result
        // moves the scan on to the next keyword.
        let search = Arc::new(ScriptedSearch::new(vec![
            vec![],
            vec![],
            vec![DateCandidate::new("saturday", instant(2025, 11, 1))],
        ]));
        let resolver = SearchDateResolver::new(search.clone(), frozen_clock());

        let resolved = resolver.resolve("saturday would work, or some other weekend");
        assert_eq!(resolved, Some(date(2025, 11, 1)));

        let queries = search.queries();
        assert_eq!(queries.len(), 3);
        assert!(queries[1].contains("weekend"));
        assert!(queries[2].starts_with("saturday"));
    }

    #[test]
    fn test_fallback_takes_first_candidate_unfiltered() {
        // Unlike the direct pass, the windowed retry trusts its first
        // candidate even when the span is numeric.
        let search = Arc::new(ScriptedSearch::new(vec![
            vec![],
            vec![DateCandidate::new("25", instant(2025, 12, 25))],
        ]));
        let resolver = SearchDateResolver::new(search, frozen_clock());

        let resolved = resolver.resolve("christmas day, the 25");
        assert_eq!(resolved, Some(date(2025, 12, 25)));
    }

    #[test]
    fn test_no_date_anywhere_is_none() {
        let search = Arc::new(ScriptedSearch::new(vec![]));
        let resolver = SearchDateResolver::new(search, frozen_clock());
        assert_eq!(resolver.resolve("a film festival with 100 people"), None);
    }

    #[test]
    fn test_window_radius_is_tunable() {
        let search = Arc::new(ScriptedSearch::new(vec![vec![], vec![]]));
        let resolver =
            SearchDateResolver::new(search.clone(), frozen_clock()).with_window_radius(5);

        resolver.resolve("it should be on christmas this year");
        let queries = search.queries();
        assert!(queries[1].len() <= 5 + "christmas".len() + 5);
    }

    #[test]
    fn test_entity_resolver_prefers_absolute_parse() {
        let search = Arc::new(TableSearch {
            absolute: HashMap::from([("January 1st 2026".to_string(), instant(2026, 1, 1))]),
            searched: HashMap::new(),
        });
        let recognizer = Arc::new(StaticEntities(vec![
            NamedEntity::new("40", "CARDINAL"),
            NamedEntity::new("January 1st 2026", "DATE"),
        ]));
        let resolver = EntityDateResolver::new(search, recognizer, frozen_clock());

        let resolved = resolver.resolve("film festival, 40 people, judges, January 1st 2026.");
        assert_eq!(resolved, Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_entity_resolver_falls_back_to_search() {
        // Relative phrases fail the absolute parse but the confined search
        // still resolves them.
        let search = Arc::new(TableSearch {
            absolute: HashMap::new(),
            searched: HashMap::from([(
                "next saturday".to_string(),
                vec![DateCandidate::new("next saturday", instant(2025, 11, 1))],
            )]),
        });
        let recognizer = Arc::new(StaticEntities(vec![NamedEntity::new(
            "next saturday",
            "DATE",
        )]));
        let resolver = EntityDateResolver::new(search, recognizer, frozen_clock());

        assert_eq!(
            resolver.resolve("a skateboard event next saturday"),
            Some(date(2025, 11, 1))
        );
    }

    #[test]
    fn test_entity_resolver_ignores_non_date_entities() {
        let search = Arc::new(TableSearch {
            absolute: HashMap::from([("the grand hall".to_string(), instant(2025, 1, 1))]),
            searched: HashMap::new(),
        });
        let recognizer = Arc::new(StaticEntities(vec![NamedEntity::new(
            "the grand hall",
            "FAC",
        )]));
        let resolver = EntityDateResolver::new(search, recognizer, frozen_clock());

        assert_eq!(resolver.resolve("anything"), None);
    }

    #[test]
    fn test_char_window_respects_boundaries() {
        let text = "caf\u{e9} on saturday";
        // A window landing inside the two-byte e-acute must widen, not panic
        let window = char_window(text, 4, 2);
        assert!(window.contains('\u{e9}'));
        assert_eq!(char_window("abc", 1, 10), "abc");
    }
}
