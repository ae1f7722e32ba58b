//! crates/rover_story_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete catalog transport and of whatever
//! renders the UI.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{PhotoFilter, PhotoId, PhotoRecord, SearchResult, Slide, Source};

//=========================================================================================
// Catalog Error and Result Types
//=========================================================================================

/// Errors crossing the catalog port.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The startup load of the source list failed. Fatal to the session:
    /// no search can be validated without the activity windows.
    #[error("Photo catalog is unavailable: {0}")]
    Unavailable(String),

    /// A per-date photo fetch failed mid-search. The search is abandoned
    /// and the user must resubmit.
    #[error("Photo fetch failed: {0}")]
    Fetch(String),
}

/// A convenience type alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The remote photo catalog. One implementation talks to the real API over
/// HTTP; tests substitute a scripted double.
#[async_trait]
pub trait PhotoCatalog: Send + Sync {
    /// Fetches every searchable source and its activity window.
    async fn fetch_sources(&self) -> CatalogResult<Vec<Source>>;

    /// Fetches all photographs taken by one source on one Earth date.
    /// An empty vec is a normal answer, not an error.
    async fn fetch_photos(
        &self,
        source_name: &str,
        earth_date: NaiveDate,
    ) -> CatalogResult<Vec<PhotoRecord>>;
}

/// The named screens the presentation layer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    SavedList,
    Story,
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// The narrow interface the core uses to talk to the presentation layer.
/// No shared mutable state crosses this boundary; every method is a
/// fire-and-forget instruction.
pub trait Renderer: Send + Sync {
    fn show_panel(&self, panel: Panel);
    fn render_results(&self, result: &SearchResult, filter: &PhotoFilter);
    fn render_source_options(&self, source_names: &[String]);
    fn render_camera_options(&self, camera_names: &[String]);
    fn show_message(&self, kind: MessageKind, text: &str);
    fn render_slides(&self, slides: &[Slide]);
    fn confirm_saved(&self, photo_id: PhotoId);
    fn confirm_duplicate(&self, photo_id: PhotoId);
}
