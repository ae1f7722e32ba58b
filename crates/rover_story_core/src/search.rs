//! crates/rover_story_core/src/search.rs
//!
//! The search resolution engine. Given a requested Earth date it locates the
//! nearest date (forward or backward) that has at least one photograph across
//! all sources, probing one candidate date at a time with a concurrent
//! per-source fan-out.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::domain::{DateBounds, PhotoRecord, SearchResult};
use crate::ports::{CatalogError, PhotoCatalog};

/// The terminal states of a date resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A date with photographs was located.
    Found(SearchResult),
    /// The requested date lies outside every source's activity window.
    /// Carries the global bounds so the caller can hint at a usable range.
    Rejected(DateBounds),
    /// The caller abandoned the search before a probe succeeded.
    Cancelled,
}

/// Runs the expanding bidirectional search against a `PhotoCatalog`.
pub struct SearchEngine {
    port: Arc<dyn PhotoCatalog>,
}

impl SearchEngine {
    pub fn new(port: Arc<dyn PhotoCatalog>) -> Self {
        Self { port }
    }

    /// Resolves `requested` to the nearest date with photographs.
    ///
    /// The probe sequence is fixed and must stay reproducible for "nearest
    /// date" ties: offsets are always measured from `requested`, the
    /// direction flips after every empty probe, and the step grows only when
    /// the direction returns to forward. That yields
    /// D, D, D+1, D-1, D+2, D-2, ... (the zero step is probed twice), and a
    /// future date wins any distance tie because it is probed first at each
    /// step size.
    ///
    /// There is no upper bound on the step: the gate only admits dates inside
    /// at least one source's lifetime, and every source is assumed to have
    /// photographed at least one day of its own lifetime.
    ///
    /// Any single fetch failure aborts the whole resolution with
    /// `CatalogError::Fetch`; an empty day and a failed day are never
    /// conflated. The token is honored between probes: an in-flight fan-out
    /// always settles, but no further probe is issued once cancellation is
    /// requested.
    pub async fn resolve(
        &self,
        catalog: &Catalog,
        requested: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<SearchOutcome, CatalogError> {
        // Gate: reject before any network access.
        if !catalog.windows().contains(requested) {
            let bounds = catalog.windows().bounds().ok_or_else(|| {
                CatalogError::Unavailable("no usable sources loaded".to_string())
            })?;
            info!(%requested, "Date outside all activity windows, rejecting");
            return Ok(SearchOutcome::Rejected(bounds));
        }

        let mut direction: i64 = 1;
        let mut step: u64 = 0;

        loop {
            if cancel.is_cancelled() {
                info!(%requested, "Search cancelled before next probe");
                return Ok(SearchOutcome::Cancelled);
            }

            let cursor = offset_date(requested, direction, step);
            let photos = self.probe(catalog, cursor).await?;

            if !photos.is_empty() {
                info!(%requested, resolved = %cursor, count = photos.len(), "Search resolved");
                return Ok(SearchOutcome::Found(SearchResult {
                    requested_date: requested,
                    resolved_date: cursor,
                    photos,
                }));
            }

            debug!(probed = %cursor, step, direction, "Probe empty, expanding");
            direction = -direction;
            if direction > 0 {
                step += 1;
            }
        }
    }

    /// One probe: fetch the cursor date from every source concurrently,
    /// barrier on all of them, and union the results in source order.
    /// Partial results are never used; the probe is scored only after every
    /// fetch settles.
    async fn probe(
        &self,
        catalog: &Catalog,
        cursor: NaiveDate,
    ) -> Result<Vec<PhotoRecord>, CatalogError> {
        let fetches = catalog
            .source_names()
            .map(|name| self.port.fetch_photos(name, cursor));

        let per_source = try_join_all(fetches).await.map_err(|e| match e {
            CatalogError::Fetch(_) => e,
            other => CatalogError::Fetch(other.to_string()),
        })?;

        Ok(per_source.into_iter().flatten().collect())
    }
}

/// `requested + direction * step` in whole calendar days. Dates anywhere
/// near rover history are far from chrono's representable range, so the
/// saturating fallbacks are unreachable in practice.
fn offset_date(requested: NaiveDate, direction: i64, step: u64) -> NaiveDate {
    if direction >= 0 {
        requested
            .checked_add_days(Days::new(step))
            .unwrap_or(NaiveDate::MAX)
    } else {
        requested
            .checked_sub_days(Days::new(step))
            .unwrap_or(NaiveDate::MIN)
    }
}
