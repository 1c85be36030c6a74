//! Lookup failure taxonomy
//!
//! The error type a search context reports from its raw find operations.
//! The safe lookup layer collapses every variant into "no success this
//! attempt", so the distinctions exist for driver adapters and their logs,
//! not for callers of the safe surface.

use thiserror::Error;

/// Failure reported by a search context's raw find operation
#[derive(Error, Debug)]
pub enum LookupError {
    /// The locator matched nothing in the current document
    #[error("element not found: {0}")]
    NotFound(String),

    /// An element located earlier has since left the document
    #[error("stale element: {0}")]
    StaleElement(String),

    /// The frame hosting the search context was detached or replaced
    #[error("stale frame: {0}")]
    StaleFrame(String),

    /// The window or tab owning the search context is gone
    #[error("stale window: {0}")]
    StaleWindow(String),

    /// Any other failure surfaced by the underlying driver
    #[error("driver error: {0}")]
    Driver(String),
}

/// Convenience Result type for search context operations
pub type Result<T> = std::result::Result<T, LookupError>;

impl LookupError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a stale-element error
    pub fn stale_element(msg: impl Into<String>) -> Self {
        Self::StaleElement(msg.into())
    }

    /// Create a stale-frame error
    pub fn stale_frame(msg: impl Into<String>) -> Self {
        Self::StaleFrame(msg.into())
    }

    /// Create a stale-window error
    pub fn stale_window(msg: impl Into<String>) -> Self {
        Self::StaleWindow(msg.into())
    }

    /// Create a generic driver error
    pub fn driver(msg: impl Into<String>) -> Self {
        Self::Driver(msg.into())
    }
}
