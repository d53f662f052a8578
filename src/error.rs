//! Error types for the policy store

use thiserror::Error;

/// Result type alias for policy store operations
pub type Result<T> = std::result::Result<T, PolicyStoreError>;

/// Errors surfaced by policy store operations
///
/// Absence of authentication, of matching authorities, or of matching
/// policies are normal conditions represented as empty results, not errors.
/// Errors originate only in upstream lookups and propagate unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyStoreError {
    /// Entity name is not known to the metadata resolver
    #[error("unknown entity '{name}'")]
    UnknownEntity { name: String },

    /// Failure raised by a collaborator implementation
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for PolicyStoreError {
    fn from(err: anyhow::Error) -> Self {
        PolicyStoreError::Internal {
            message: err.to_string(),
        }
    }
}
