//! services/client/src/render.rs
//!
//! A tracing-backed `Renderer`. Real presentation (HTML, carousels, toasts)
//! lives outside this repository; this implementation gives the binary a
//! working collaborator and makes every render call visible in the logs.

use tracing::{info, warn};

use rover_story_core::domain::{PhotoFilter, PhotoId, SearchResult, Slide};
use rover_story_core::ports::{MessageKind, Panel, Renderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn show_panel(&self, panel: Panel) {
        info!(?panel, "Showing panel");
    }

    fn render_results(&self, result: &SearchResult, filter: &PhotoFilter) {
        let shown = result
            .photos
            .iter()
            .filter(|photo| filter.matches(photo))
            .count();
        info!(
            resolved = %result.resolved_date,
            total = result.photos.len(),
            shown,
            "Rendering results"
        );
        for photo in result.photos.iter().filter(|photo| filter.matches(photo)) {
            info!(
                id = %photo.id,
                source = %photo.source_name,
                camera = %photo.camera_name,
                sol = photo.sol,
                url = %photo.image_url,
                "  photo"
            );
        }
    }

    fn render_source_options(&self, source_names: &[String]) {
        info!(options = ?source_names, "Rendering rover dropdown");
    }

    fn render_camera_options(&self, camera_names: &[String]) {
        info!(options = ?camera_names, "Rendering camera dropdown");
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        match kind {
            MessageKind::Info => info!("{text}"),
            MessageKind::Warning | MessageKind::Error => warn!("{text}"),
        }
    }

    fn render_slides(&self, slides: &[Slide]) {
        info!(count = slides.len(), "Rendering story");
        for slide in slides {
            info!(
                position = %slide.position_label,
                meta = %slide.metadata_summary,
                caption = %slide.caption_text,
                url = %slide.image_url,
                "  slide"
            );
        }
    }

    fn confirm_saved(&self, photo_id: PhotoId) {
        info!(%photo_id, "Photo saved to the list");
    }

    fn confirm_duplicate(&self, photo_id: PhotoId) {
        warn!(%photo_id, "Photo is already on the list");
    }
}
