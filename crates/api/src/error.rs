//! Server error types.

use thiserror::Error;

/// Errors that can stop the server.
///
/// Request handling itself never fails; these only occur while claiming the
/// listening socket or running the accept loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound (address in use, permission
    /// denied, unresolvable host).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed after a successful bind.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl ServerError {
    /// Returns true if this is a bind failure.
    pub fn is_bind(&self) -> bool {
        matches!(self, ServerError::Bind { .. })
    }
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
