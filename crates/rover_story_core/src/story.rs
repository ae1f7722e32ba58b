//! crates/rover_story_core/src/story.rs
//!
//! The narrative builder: projects the saved-item registry into slideshow
//! frames. Pure; the registry's insertion order is the slide order.

use crate::domain::{SavedItem, Slide};
use crate::registry::SavedItemRegistry;

/// One slide per saved item. An empty registry yields an empty vec, which
/// callers must treat as "nothing to narrate" rather than an error.
pub fn build_slides(registry: &SavedItemRegistry) -> Vec<Slide> {
    let total = registry.len();
    registry
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| slide_for(item, index + 1, total))
        .collect()
}

fn slide_for(item: &SavedItem, position: usize, total: usize) -> Slide {
    let photo = &item.photo;
    Slide {
        image_url: photo.image_url.clone(),
        caption_text: item.caption.clone(),
        position_label: format!("{position} of {total}"),
        metadata_summary: format!(
            "{} · {} · sol {}",
            photo.source_name, photo.earth_date, photo.sol
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PhotoId, PhotoRecord};
    use chrono::NaiveDate;

    fn photo(id: u64) -> PhotoRecord {
        PhotoRecord {
            id: PhotoId(id),
            source_name: "Curiosity".to_string(),
            camera_name: "NAVCAM".to_string(),
            camera_full_name: "Navigation Camera".to_string(),
            earth_date: NaiveDate::from_ymd_opt(2015, 6, 3).unwrap(),
            sol: 1000,
            image_url: format!("http://img/{id}.jpg"),
        }
    }

    #[test]
    fn empty_registry_yields_no_slides() {
        let registry = SavedItemRegistry::new();
        assert!(build_slides(&registry).is_empty());
    }

    #[test]
    fn slides_follow_insertion_order_with_position_labels() {
        let mut registry = SavedItemRegistry::new();
        // Ids deliberately out of numeric order; insertion order must win.
        registry.add(photo(30));
        registry.add(photo(10));
        registry.add(photo(20));
        registry.set_caption(PhotoId(10), "second one");

        let slides = build_slides(&registry);

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].position_label, "1 of 3");
        assert_eq!(slides[1].position_label, "2 of 3");
        assert_eq!(slides[2].position_label, "3 of 3");
        assert_eq!(slides[0].image_url, "http://img/30.jpg");
        assert_eq!(slides[1].image_url, "http://img/10.jpg");
        assert_eq!(slides[1].caption_text, "second one");
        assert_eq!(slides[2].caption_text, "");
    }

    #[test]
    fn metadata_summary_carries_source_date_and_sol() {
        let mut registry = SavedItemRegistry::new();
        registry.add(photo(1));

        let slides = build_slides(&registry);
        assert_eq!(slides[0].metadata_summary, "Curiosity · 2015-06-03 · sol 1000");
    }
}
