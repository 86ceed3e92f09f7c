//! Error types for the prdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for prdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document export.
#[derive(Error, Debug)]
pub enum Error {
    /// No source text was supplied; nothing was rendered.
    #[error("No document content to export")]
    ContentMissing,

    /// The layout or tree-building stage hit an internal invariant
    /// violation, or output serialization failed. No partial artifact
    /// is produced.
    #[error("Rendering error: {0}")]
    Render(String),

    /// I/O error from a caller's persistence step. The export engine
    /// itself only returns in-memory artifacts and never raises this;
    /// it exists so callers can propagate persistence failures through
    /// the same error type.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ContentMissing;
        assert_eq!(err.to_string(), "No document content to export");

        let err = Error::Render("unmeasurable text".to_string());
        assert_eq!(err.to_string(), "Rendering error: unmeasurable text");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
