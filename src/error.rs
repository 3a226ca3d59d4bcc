//! Error types for intake

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the crate surfaces
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or incomplete environment configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Submission failed local validation (no remote calls were made)
    #[error("validation failed: {0}")]
    Validation(String),

    /// A cached submission blob could not be parsed.
    ///
    /// Callers treat this as "no submission present" and re-render the form
    /// rather than failing the request.
    #[error("malformed cached submission: {0}")]
    MalformedCache(String),

    /// Any failure reported by the repository service (network, auth, rate
    /// limit, conflict). Never retried.
    #[error("repository error: {0}")]
    Remote(String),

    /// No usable credential could be resolved
    #[error("authentication error: {0}")]
    Auth(String),

    /// Malformed user-supplied input (repo target, field syntax)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invariant violation that should not happen in practice
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::Remote(err.to_string())
    }
}
