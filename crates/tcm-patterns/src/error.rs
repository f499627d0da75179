use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    /// For callers that need an error value for an unknown catalog id
    /// (e.g. an HTTP 404 mapping); lookups themselves return `Option`.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
