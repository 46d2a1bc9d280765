//! Error types for the loan ledger.

use crate::catalog_actor::CatalogError;
use crate::patron_actor::PatronError;
use thiserror::Error;

/// Errors that can occur while lending.
///
/// All variants are recoverable domain failures: a missing patron is just as
/// reportable as a missing book, never a crash.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoanError {
    /// No registered patron answers to this name.
    #[error("No patron named {0} is registered")]
    PatronNotFound(String),

    /// The requested ISBN is not in the catalog.
    #[error("No book with ISBN {0} exists in the catalog")]
    BookNotFound(String),

    /// The title exists but every copy is out on loan.
    #[error("No copies of \"{0}\" are currently available")]
    BookUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Loan communication error: {0}")]
    Channel(String),
}

impl From<CatalogError> for LoanError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(isbn) => LoanError::BookNotFound(isbn),
            CatalogError::NoCopies(title) => LoanError::BookUnavailable(title),
            other => LoanError::Channel(other.to_string()),
        }
    }
}

impl From<PatronError> for LoanError {
    fn from(e: PatronError) -> Self {
        LoanError::Channel(e.to_string())
    }
}
