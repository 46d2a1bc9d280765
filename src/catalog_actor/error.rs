//! Error types for the catalog registry.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The registration payload failed validation; the message names the
    /// offending field.
    #[error("Invalid book data: {0}")]
    InvalidBook(String),

    /// No book in the catalog carries this ISBN.
    #[error("No book with ISBN {0} exists in the catalog")]
    NotFound(String),

    /// The title exists but every copy is out on loan.
    #[error("No copies of \"{0}\" are currently available")]
    NoCopies(String),

    /// An error occurred while communicating with the actor system.
    #[error("Catalog communication error: {0}")]
    Channel(String),
}
