pub mod protocol;
pub mod session;
pub mod state;

// Re-export the pieces the binary wires together.
pub use protocol::{Command, PanelTarget};
pub use state::{Screen, Session};
