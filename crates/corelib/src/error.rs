//! Error types for the continuum library.

use thiserror::Error;

/// Result type alias for the continuum library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by registry, ring construction and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A server with the same hostname and port is already registered.
    #[error("server {0} already added")]
    DuplicateServer(String),
    /// The server is not part of the registry.
    #[error("server {0} not found")]
    NotFound(String),
    /// Resolution was attempted against a ring without any dots.
    #[error("empty continuum")]
    EmptyRing,
    /// Ring parameters or server capacities cannot produce a ring.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
