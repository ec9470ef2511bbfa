//! Error types for viewport interaction.

use thiserror::Error;

/// Errors raised by the viewport and its collaborators.
#[derive(Debug, Error)]
pub enum ViewportError {
    /// Orbit method name is not one of the supported modes
    #[error("Unknown orbit method: {0}")]
    InvalidOrbitMethod(String),

    /// Failure reported by the native view or selection context
    #[error("View backend error: {0}")]
    Backend(#[from] BackendError),

    /// Native window handle could not be acquired
    #[error("Native window unavailable: {0}")]
    Window(String),
}

/// Failure reported by a view or selection backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct BackendError {
    /// Backend primitive that failed (e.g. "SetZoom")
    pub operation: &'static str,
    pub message: String,
}

impl BackendError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Result type for viewport operations
pub type ViewResult<T> = Result<T, ViewportError>;
