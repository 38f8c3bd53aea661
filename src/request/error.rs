//! Request-specific error types
//!
//! Building a request never fails. These errors only occur at the edges:
//! resolving category labels against a catalog, and decoding a hand-off payload.

use thiserror::Error;

/// Errors raised while normalizing or transporting filter criteria
#[derive(Debug, Error)]
pub enum RequestError {
    /// A category label has no match in the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The hand-off payload could not be encoded or decoded
    #[error("Invalid request payload: {0}")]
    Payload(#[from] serde_json::Error),
}
