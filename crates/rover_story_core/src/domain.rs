//! crates/rover_story_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or rendering format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The catalog's own numeric identifier for a photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub u64);

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A searchable source (a rover) with its bounded historical activity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    /// First Earth date on which the source was active (landing date).
    pub activity_start: NaiveDate,
    /// Last Earth date with captured data.
    pub activity_end: NaiveDate,
}

/// A single photograph as returned by the catalog. Immutable once produced;
/// the presentation layer never mutates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub source_name: String,
    pub camera_name: String,
    pub camera_full_name: String,
    pub earth_date: NaiveDate,
    /// Mission-relative day count.
    pub sol: u64,
    pub image_url: String,
}

/// The union of all sources' activity windows, used only for user-facing
/// rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// The outcome of a successful date search. `resolved_date` may differ from
/// `requested_date` when the requested day had no photographs and a nearby
/// day was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub requested_date: NaiveDate,
    pub resolved_date: NaiveDate,
    pub photos: Vec<PhotoRecord>,
}

/// A photograph the user has put on their shortlist, together with the
/// free-text caption they typed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedItem {
    pub photo: PhotoRecord,
    pub caption: String,
}

/// One frame of the narrated slideshow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image_url: String,
    pub caption_text: String,
    /// Human-readable position, e.g. "2 of 5".
    pub position_label: String,
    /// Source name, Earth date and sol on one line.
    pub metadata_summary: String,
}

/// The rover/camera dropdown selection applied to displayed results.
/// `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoFilter {
    pub source: Option<String>,
    pub camera: Option<String>,
}

impl PhotoFilter {
    pub fn matches(&self, photo: &PhotoRecord) -> bool {
        if let Some(source) = &self.source {
            if &photo.source_name != source {
                return false;
            }
        }
        if let Some(camera) = &self.camera {
            if &photo.camera_name != camera {
                return false;
            }
        }
        true
    }
}

/// Unique source names appearing in a result set, in first-appearance order.
/// Feeds the rover dropdown.
pub fn source_options(result: &SearchResult) -> Vec<String> {
    let mut names = Vec::new();
    for photo in &result.photos {
        if !names.contains(&photo.source_name) {
            names.push(photo.source_name.clone());
        }
    }
    names
}

/// Unique camera names used by one source in a result set, in
/// first-appearance order. Feeds the camera dropdown once a rover is chosen.
pub fn camera_options(result: &SearchResult, source_name: &str) -> Vec<String> {
    let mut names = Vec::new();
    for photo in &result.photos {
        if photo.source_name == source_name && !names.contains(&photo.camera_name) {
            names.push(photo.camera_name.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: u64, source: &str, camera: &str) -> PhotoRecord {
        PhotoRecord {
            id: PhotoId(id),
            source_name: source.to_string(),
            camera_name: camera.to_string(),
            camera_full_name: camera.to_string(),
            earth_date: NaiveDate::from_ymd_opt(2015, 6, 3).unwrap(),
            sol: 1000,
            image_url: format!("http://img/{id}.jpg"),
        }
    }

    fn result(photos: Vec<PhotoRecord>) -> SearchResult {
        let date = NaiveDate::from_ymd_opt(2015, 6, 3).unwrap();
        SearchResult {
            requested_date: date,
            resolved_date: date,
            photos,
        }
    }

    #[test]
    fn filter_matches_on_source_and_camera() {
        let p = photo(1, "Curiosity", "NAVCAM");

        assert!(PhotoFilter::default().matches(&p));
        assert!(PhotoFilter {
            source: Some("Curiosity".into()),
            camera: Some("NAVCAM".into()),
        }
        .matches(&p));
        assert!(!PhotoFilter {
            source: Some("Spirit".into()),
            camera: None,
        }
        .matches(&p));
        assert!(!PhotoFilter {
            source: Some("Curiosity".into()),
            camera: Some("FHAZ".into()),
        }
        .matches(&p));
    }

    #[test]
    fn option_lists_are_unique_and_order_preserving() {
        let r = result(vec![
            photo(1, "Curiosity", "NAVCAM"),
            photo(2, "Spirit", "PANCAM"),
            photo(3, "Curiosity", "FHAZ"),
            photo(4, "Curiosity", "NAVCAM"),
        ]);

        assert_eq!(source_options(&r), vec!["Curiosity", "Spirit"]);
        assert_eq!(camera_options(&r, "Curiosity"), vec!["NAVCAM", "FHAZ"]);
        assert_eq!(camera_options(&r, "Opportunity"), Vec::<String>::new());
    }
}
