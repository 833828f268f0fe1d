use thiserror::Error;

/// Top-level error type for the silhouette pipeline.
#[derive(Debug, Error)]
pub enum SilhouetteError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised by a vertex source before the pipeline runs.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no input available: {0}")]
    NoInputAvailable(String),

    #[error("part not found: {0}")]
    PartNotFound(String),
}

/// Errors related to pipeline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to the textual point format.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("line {line} is not a point record: {text:?}")]
    Malformed { line: usize, text: String },

    #[error("invalid point pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`SilhouetteError`].
pub type Result<T> = std::result::Result<T, SilhouetteError>;
