//! Startup errors for the server binary.

use widgets::WidgetError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    /// The site content failed validation.
    #[error("site content rejected: {0}")]
    Content(#[from] WidgetError),
    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
