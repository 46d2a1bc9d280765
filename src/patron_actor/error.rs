//! Error types for the patron registry.

use thiserror::Error;

/// Errors that can occur during patron operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatronError {
    /// The registration payload failed validation.
    #[error("Invalid patron data: {0}")]
    InvalidPatron(String),

    /// An error occurred while communicating with the actor system.
    #[error("Patron communication error: {0}")]
    Channel(String),
}
