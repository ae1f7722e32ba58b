//! services/client/src/app/protocol.rs
//!
//! Defines the command protocol between the presentation layer and the core.
//! Every user action arrives as one explicit `Command` value; the core never
//! sees UI events directly.

use serde::Deserialize;

use rover_story_core::ports::Panel;

/// The named screen a navigation command targets.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PanelTarget {
    Search,
    SavedList,
    Story,
}

impl From<PanelTarget> for Panel {
    fn from(target: PanelTarget) -> Self {
        match target {
            PanelTarget::Search => Panel::Search,
            PanelTarget::SavedList => Panel::SavedList,
            PanelTarget::Story => Panel::Story,
        }
    }
}

/// Represents the structured commands the presentation layer can dispatch.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Runs the date search. The date is the raw user input; parsing and
    /// validation happen inside the core, failing closed.
    SearchByDate { date: String },

    /// Narrows the displayed results to one source; `None` shows all
    /// sources and clears any camera selection.
    SelectSource { source: Option<String> },

    /// Narrows the displayed results to one camera of the selected source.
    SelectCamera { camera: Option<String> },

    /// Puts a currently displayed photo on the shortlist.
    SavePhoto { photo_id: u64 },

    /// Takes a photo off the shortlist. Harmless when absent.
    RemovePhoto { photo_id: u64 },

    /// Updates the free-text caption of a shortlisted photo.
    SetCaption { photo_id: u64, caption: String },

    /// Switches to another screen.
    ShowPanel { panel: PanelTarget },

    /// Builds the slideshow from the shortlist and shows the story screen.
    BuildStory,

    /// Clears the current results and filters.
    ResetSearch,
}
