//! services/client/src/app/state.rs
//!
//! Defines the session state: the loaded catalog, the search engine, the
//! shortlist registry and the explicit screen state machine that replaces
//! ad hoc show/hide toggling.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use rover_story_core::{
    Catalog, PhotoCatalog, PhotoFilter, Renderer, SavedItemRegistry, SearchEngine, SearchResult,
};

/// The screen the session is currently on. Each transition is driven by a
/// single user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Search,
    SavedList,
    Story,
}

/// The state for one user session, created once after the catalog has
/// loaded. There is a single logical thread of control: the registry is only
/// ever mutated by dispatched commands, never by the search engine.
pub struct Session {
    pub(crate) catalog: Catalog,
    pub(crate) engine: SearchEngine,
    pub(crate) registry: SavedItemRegistry,
    pub(crate) renderer: Arc<dyn Renderer>,
    pub(crate) screen: Screen,
    pub(crate) filter: PhotoFilter,
    pub(crate) last_result: Option<SearchResult>,
    /// Cancels an in-progress search at its next probe boundary.
    pub(crate) cancel: CancellationToken,
    pub(crate) busy: bool,
}

impl Session {
    /// Creates a session over an already-loaded catalog. Loading the catalog
    /// first is a hard prerequisite; no search can be validated without it.
    pub fn new(catalog: Catalog, port: Arc<dyn PhotoCatalog>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            catalog,
            engine: SearchEngine::new(port),
            registry: SavedItemRegistry::new(),
            renderer,
            screen: Screen::default(),
            filter: PhotoFilter::default(),
            last_result: None,
            cancel: CancellationToken::new(),
            busy: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// True while a search is running; the loading indicator mirrors this.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn saved_count(&self) -> usize {
        self.registry.len()
    }

    /// Requests cancellation of the current search. Honored at the next
    /// probe boundary; an in-flight probe still settles.
    pub fn cancel_search(&self) {
        self.cancel.cancel();
    }
}
