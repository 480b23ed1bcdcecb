//! Error kinds shared across the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a conversion run. Each variant carries enough
/// context to name the offending input in the diagnostic.
#[derive(Debug, Error)]
pub enum Error {
    /// The source path cannot be reduced to a usable output base name.
    #[error("invalid input path: {} (expected a .ronn or .md source file)", .path.display())]
    InvalidInputPath { path: PathBuf },

    /// The first line of a document is not `name(section) -- description`.
    #[error("malformed document header: {reason}")]
    MalformedDocumentHeader { reason: String },

    /// The external renderer failed for a (document, format) pair.
    /// The built-in markdown converter is infallible; this is surfaced
    /// by `Converter` implementations that can fail.
    #[allow(dead_code)]
    #[error("conversion failed: {reason}")]
    ConversionFailure { reason: String },

    /// Read or write error on a source or destination.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
