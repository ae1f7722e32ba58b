pub mod catalog;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod search;
pub mod story;

pub use catalog::{parse_earth_date, ActivityWindow, ActivityWindows, Catalog};
pub use domain::{
    camera_options, source_options, DateBounds, PhotoFilter, PhotoId, PhotoRecord, SavedItem,
    SearchResult, Slide, Source,
};
pub use ports::{CatalogError, CatalogResult, MessageKind, Panel, PhotoCatalog, Renderer};
pub use registry::SavedItemRegistry;
pub use search::{SearchEngine, SearchOutcome};
pub use story::build_slides;
