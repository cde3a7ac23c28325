//! Error types for Tour of Schools

use thiserror::Error;

/// Result type alias using the Tour of Schools Error
pub type Result<T> = std::result::Result<T, Error>;

/// Tour of Schools error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("School not found: id {id}")]
    NotFound { id: i64 },
}

impl Error {
    /// True when the failure is the backend's explicit not-found answer
    /// rather than a transport problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
