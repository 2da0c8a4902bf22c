//! Startup errors
//!
//! Everything after startup is total; only wiring the page collaborators can
//! fail, and it fails before any state is created.

use thiserror::Error;

/// Result type alias for startup operations
pub type Result<T> = std::result::Result<T, StartupError>;

/// A required collaborator was missing or unusable
#[derive(Error, Debug)]
pub enum StartupError {
    /// No global `window` (not running in a browser page)
    #[error("no global window")]
    MissingWindow,

    /// Window has no document
    #[error("window has no document")]
    MissingDocument,

    /// Required DOM element not found
    #[error("missing element #{id}")]
    MissingElement { id: &'static str },

    /// Element exists but is not a `<canvas>`
    #[error("element #{id} is not a canvas")]
    NotACanvas { id: &'static str },

    /// Canvas refused to hand out a 2D context
    #[error("2D drawing context unavailable")]
    ContextUnavailable,

    /// `data-settings` held malformed JSON
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
