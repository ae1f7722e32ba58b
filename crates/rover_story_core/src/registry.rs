//! crates/rover_story_core/src/registry.rs
//!
//! The saved-item registry: the user's ordered, deduplicated shortlist of
//! photographs. Memory-only; it resets with the session. Mutated exclusively
//! by UI-triggered actions, never by the search engine.

use std::collections::HashSet;

use crate::domain::{PhotoId, PhotoRecord, SavedItem};

/// Insertion-ordered collection of saved photographs, unique by photo id.
/// The insertion order is exactly the order the narrative builder uses.
#[derive(Debug, Default)]
pub struct SavedItemRegistry {
    items: Vec<SavedItem>,
    ids: HashSet<PhotoId>,
}

impl SavedItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a photo with an empty caption. Returns false and leaves the
    /// registry untouched when the id is already present.
    pub fn add(&mut self, photo: PhotoRecord) -> bool {
        if !self.ids.insert(photo.id) {
            return false;
        }
        self.items.push(SavedItem {
            photo,
            caption: String::new(),
        });
        true
    }

    /// Removes the entry with the given id. No-op when absent; the order of
    /// the remaining entries is unchanged.
    pub fn remove(&mut self, id: PhotoId) {
        if self.ids.remove(&id) {
            self.items.retain(|item| item.photo.id != id);
        }
    }

    /// Replaces the caption of an existing entry. No-op when absent.
    pub fn set_caption(&mut self, id: PhotoId, caption: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.photo.id == id) {
            item.caption = caption.to_string();
        }
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The saved items in insertion order.
    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn add_is_idempotent_on_id() {
        let mut registry = SavedItemRegistry::new();

        assert!(registry.add(photo(7)));
        assert!(!registry.add(photo(7)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_twice_is_a_silent_noop() {
        let mut registry = SavedItemRegistry::new();
        registry.add(photo(7));

        registry.remove(PhotoId(7));
        registry.remove(PhotoId(7));
        assert!(registry.is_empty());

        // Removing an id that was never added is equally harmless.
        registry.remove(PhotoId(99));
    }

    #[test]
    fn insertion_order_survives_removal() {
        let mut registry = SavedItemRegistry::new();
        registry.add(photo(3));
        registry.add(photo(1));
        registry.add(photo(2));

        registry.remove(PhotoId(1));

        let ids: Vec<u64> = registry.items().iter().map(|i| i.photo.id.0).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn removed_id_can_be_saved_again() {
        let mut registry = SavedItemRegistry::new();
        registry.add(photo(7));
        registry.remove(PhotoId(7));

        assert!(registry.add(photo(7)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn captions_default_empty_and_only_touch_existing_entries() {
        let mut registry = SavedItemRegistry::new();
        registry.add(photo(1));
        assert_eq!(registry.items()[0].caption, "");

        registry.set_caption(PhotoId(1), "dusty horizon");
        assert_eq!(registry.items()[0].caption, "dusty horizon");

        registry.set_caption(PhotoId(42), "nobody home");
        assert_eq!(registry.len(), 1);
    }
}
