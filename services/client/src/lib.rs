pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod render;

pub use app::{Command, Session};
pub use config::Config;
pub use error::AppError;
