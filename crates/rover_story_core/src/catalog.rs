//! crates/rover_story_core/src/catalog.rs
//!
//! The catalog client and date validator: loads the source list once at
//! startup, derives per-source activity windows and the global date bounds,
//! and answers the pure "is this date inside any source's lifetime" question
//! that gates every search.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{DateBounds, Source};
use crate::ports::{CatalogError, PhotoCatalog};

/// Parses a user-supplied `YYYY-MM-DD` string. Fails closed: anything that
/// is not a valid calendar date yields `None`.
pub fn parse_earth_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// One source's activity window. Invariant: `activity_start <= activity_end`;
/// entries violating this never make it into `ActivityWindows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub activity_start: NaiveDate,
    pub activity_end: NaiveDate,
}

impl ActivityWindow {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.activity_start <= date && date <= self.activity_end
    }
}

/// The `name -> window` mapping derived from the loaded source list,
/// immutable for the lifetime of the session.
#[derive(Debug, Clone, Default)]
pub struct ActivityWindows {
    windows: BTreeMap<String, ActivityWindow>,
    bounds: Option<DateBounds>,
}

impl ActivityWindows {
    /// Builds the mapping, dropping any source whose window is inverted.
    /// The global bounds are recomputed from the sources that survive.
    pub fn from_sources(sources: &[Source]) -> Self {
        let mut windows = BTreeMap::new();
        for source in sources {
            if source.activity_start > source.activity_end {
                warn!(
                    source = %source.name,
                    "Ignoring source with inverted activity window"
                );
                continue;
            }
            windows.insert(
                source.name.clone(),
                ActivityWindow {
                    activity_start: source.activity_start,
                    activity_end: source.activity_end,
                },
            );
        }

        let min_date = windows.values().map(|w| w.activity_start).min();
        let max_date = windows.values().map(|w| w.activity_end).max();
        let bounds = match (min_date, max_date) {
            (Some(min_date), Some(max_date)) => Some(DateBounds { min_date, max_date }),
            _ => None,
        };

        Self { windows, bounds }
    }

    /// The date validator: true iff at least one source was active on `date`.
    /// Pure; no side effects, no network access.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.windows.values().any(|w| w.contains(date))
    }

    /// Global `[min landing date, max last-active date]` across all usable
    /// sources; `None` when no source survived loading.
    pub fn bounds(&self) -> Option<DateBounds> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }
}

/// The loaded catalog: the source list in catalog order plus the derived
/// activity windows. Built once at startup and owned for the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    sources: Vec<Source>,
    windows: ActivityWindows,
}

impl Catalog {
    /// Loads the source list through the port. This is a hard prerequisite:
    /// the caller must complete it before any search can be validated, and a
    /// transport failure is fatal to the whole session.
    pub async fn load(port: &dyn PhotoCatalog) -> Result<Self, CatalogError> {
        let sources = port.fetch_sources().await.map_err(|e| match e {
            CatalogError::Unavailable(_) => e,
            other => CatalogError::Unavailable(other.to_string()),
        })?;
        let windows = ActivityWindows::from_sources(&sources);
        Ok(Self { sources, windows })
    }

    /// Builds a catalog from an already-known source list. Used by tests and
    /// by callers that obtained the list elsewhere.
    pub fn from_sources(sources: Vec<Source>) -> Self {
        let windows = ActivityWindows::from_sources(&sources);
        Self { sources, windows }
    }

    /// Source names in catalog order. This order is also the order in which
    /// a probe's per-source results are unioned.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name.as_str())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn windows(&self) -> &ActivityWindows {
        &self.windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn source(name: &str, start: NaiveDate, end: NaiveDate) -> Source {
        Source {
            name: name.to_string(),
            activity_start: start,
            activity_end: end,
        }
    }

    #[test]
    fn parse_fails_closed_on_garbage() {
        assert_eq!(parse_earth_date("2015-06-03"), Some(date(2015, 6, 3)));
        assert_eq!(parse_earth_date(" 2015-06-03 "), Some(date(2015, 6, 3)));
        assert_eq!(parse_earth_date("2015-02-30"), None);
        assert_eq!(parse_earth_date("yesterday"), None);
        assert_eq!(parse_earth_date(""), None);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let windows = ActivityWindows::from_sources(&[source(
            "Curiosity",
            date(2012, 8, 6),
            date(2023, 1, 1),
        )]);

        assert!(windows.contains(date(2012, 8, 6)));
        assert!(windows.contains(date(2023, 1, 1)));
        assert!(windows.contains(date(2018, 3, 14)));
        assert!(!windows.contains(date(2012, 8, 5)));
        assert!(!windows.contains(date(2023, 1, 2)));
    }

    #[test]
    fn date_usable_when_inside_any_source() {
        let windows = ActivityWindows::from_sources(&[
            source("Spirit", date(2004, 1, 4), date(2010, 3, 21)),
            source("Curiosity", date(2012, 8, 6), date(2023, 1, 1)),
        ]);

        // Inside Spirit only, inside Curiosity only, in the gap between them.
        assert!(windows.contains(date(2005, 5, 5)));
        assert!(windows.contains(date(2015, 5, 5)));
        assert!(!windows.contains(date(2011, 5, 5)));
    }

    #[test]
    fn inverted_window_is_excluded_from_mapping_and_bounds() {
        let windows = ActivityWindows::from_sources(&[
            source("Broken", date(2020, 1, 1), date(2019, 1, 1)),
            source("Curiosity", date(2012, 8, 6), date(2023, 1, 1)),
        ]);

        assert_eq!(windows.len(), 1);
        assert_eq!(
            windows.bounds(),
            Some(DateBounds {
                min_date: date(2012, 8, 6),
                max_date: date(2023, 1, 1),
            })
        );
    }

    #[test]
    fn bounds_span_all_usable_sources() {
        let windows = ActivityWindows::from_sources(&[
            source("Spirit", date(2004, 1, 4), date(2010, 3, 21)),
            source("Curiosity", date(2012, 8, 6), date(2023, 1, 1)),
        ]);

        assert_eq!(
            windows.bounds(),
            Some(DateBounds {
                min_date: date(2004, 1, 4),
                max_date: date(2023, 1, 1),
            })
        );
    }

    #[test]
    fn empty_source_list_has_no_bounds() {
        let windows = ActivityWindows::from_sources(&[]);
        assert!(windows.is_empty());
        assert_eq!(windows.bounds(), None);
        assert!(!windows.contains(date(2015, 1, 1)));
    }
}
