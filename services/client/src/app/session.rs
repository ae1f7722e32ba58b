//! services/client/src/app/session.rs
//!
//! The command dispatcher: the single place where user commands meet the
//! core, where errors become user-visible messages, and where the busy
//! indicator is set and reset.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use rover_story_core::{
    build_slides, camera_options, parse_earth_date, source_options, MessageKind, Panel,
    PhotoFilter, PhotoId, SearchOutcome,
};

use crate::app::protocol::{Command, PanelTarget};
use crate::app::state::{Screen, Session};
use crate::error::AppError;

impl Session {
    /// Dispatches one command. Recoverable conditions (unparseable dates,
    /// rejected dates, duplicate saves) are surfaced through the renderer
    /// and resolve to `Ok`; a catalog transport failure is surfaced too and
    /// then propagated, since the search it belonged to is abandoned.
    pub async fn handle(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::SearchByDate { date } => self.search_by_date(&date).await,
            Command::SelectSource { source } => {
                self.filter.source = source;
                // A new rover selection always resets the camera dropdown.
                self.filter.camera = None;
                if let Some(result) = &self.last_result {
                    if let Some(name) = &self.filter.source {
                        self.renderer
                            .render_camera_options(&camera_options(result, name));
                    }
                    self.renderer.render_results(result, &self.filter);
                }
                Ok(())
            }
            Command::SelectCamera { camera } => {
                self.filter.camera = camera;
                if let Some(result) = &self.last_result {
                    self.renderer.render_results(result, &self.filter);
                }
                Ok(())
            }
            Command::SavePhoto { photo_id } => {
                self.save_photo(PhotoId(photo_id));
                Ok(())
            }
            Command::RemovePhoto { photo_id } => {
                self.registry.remove(PhotoId(photo_id));
                Ok(())
            }
            Command::SetCaption { photo_id, caption } => {
                self.registry.set_caption(PhotoId(photo_id), &caption);
                Ok(())
            }
            Command::ShowPanel { panel } => {
                self.show_panel(panel);
                Ok(())
            }
            Command::BuildStory => {
                self.build_story();
                Ok(())
            }
            Command::ResetSearch => {
                self.last_result = None;
                self.filter = PhotoFilter::default();
                self.renderer.show_panel(Panel::Search);
                self.screen = Screen::Search;
                Ok(())
            }
        }
    }

    async fn search_by_date(&mut self, input: &str) -> Result<(), AppError> {
        let Some(requested) = parse_earth_date(input) else {
            // Invalid format is distinguishable here but takes the same
            // user-facing path as a rejected date.
            debug!(input, "Input does not parse as a calendar date");
            self.render_rejection();
            return Ok(());
        };

        self.busy = true;
        self.cancel = CancellationToken::new();
        let outcome = self
            .engine
            .resolve(&self.catalog, requested, &self.cancel)
            .await;
        self.busy = false;

        match outcome {
            Ok(SearchOutcome::Found(result)) => {
                if result.resolved_date != result.requested_date {
                    self.renderer.show_message(
                        MessageKind::Info,
                        &format!(
                            "No photos were found for {}. Showing results for the closest available date: {}.",
                            result.requested_date, result.resolved_date
                        ),
                    );
                }
                self.filter = PhotoFilter::default();
                self.renderer.render_source_options(&source_options(&result));
                self.renderer.render_results(&result, &self.filter);
                self.last_result = Some(result);
                Ok(())
            }
            Ok(SearchOutcome::Rejected(_)) => {
                self.render_rejection();
                Ok(())
            }
            Ok(SearchOutcome::Cancelled) => {
                info!(%requested, "Search abandoned by the user");
                Ok(())
            }
            Err(e) => {
                // The search is not resumed; the user must resubmit.
                error!(error = %e, "Catalog fetch failed during search");
                self.renderer.show_message(
                    MessageKind::Error,
                    "Couldn't reach the photo catalog. Please try again later.",
                );
                Err(AppError::Catalog(e))
            }
        }
    }

    /// The rejection hint carries the global activity bounds so the user
    /// knows which dates can work at all.
    fn render_rejection(&self) {
        let text = match self.catalog.windows().bounds() {
            Some(bounds) => format!(
                "No rover activity at this date. Images exist between {} and {}.",
                bounds.min_date, bounds.max_date
            ),
            None => "No rover activity at this date.".to_string(),
        };
        self.renderer.show_message(MessageKind::Warning, &text);
    }

    fn save_photo(&mut self, id: PhotoId) {
        let Some(photo) = self
            .last_result
            .as_ref()
            .and_then(|result| result.photos.iter().find(|p| p.id == id))
            .cloned()
        else {
            warn!(%id, "Save requested for a photo not in the current results");
            self.renderer
                .show_message(MessageKind::Warning, "That photo is not in the current results.");
            return;
        };

        if self.registry.add(photo) {
            self.renderer.confirm_saved(id);
        } else {
            // Duplicate save: a notice, not an error, and no state change.
            self.renderer.confirm_duplicate(id);
        }
    }

    fn show_panel(&mut self, target: PanelTarget) {
        if target == PanelTarget::Story && self.registry.is_empty() {
            self.render_nothing_to_narrate();
            return;
        }
        self.screen = match target {
            PanelTarget::Search => Screen::Search,
            PanelTarget::SavedList => Screen::SavedList,
            PanelTarget::Story => Screen::Story,
        };
        self.renderer.show_panel(target.into());
    }

    fn build_story(&mut self) {
        if self.registry.is_empty() {
            // A distinct "nothing to narrate" state, not an error.
            self.render_nothing_to_narrate();
            return;
        }
        let slides = build_slides(&self.registry);
        self.renderer.render_slides(&slides);
        self.screen = Screen::Story;
        self.renderer.show_panel(Panel::Story);
    }

    fn render_nothing_to_narrate(&self) {
        self.renderer.show_message(
            MessageKind::Info,
            "Nothing to narrate yet. Save a photo to the list first.",
        );
    }
}
