use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A permanent ledger entry created by a successful lend.
///
/// Loans are never updated or removed. Availability is tracked on the book's
/// copy counter, not by scanning the ledger, so this record is purely
/// historical: who took which title, and when.
///
/// The patron identity and the book title are stored as resolved snapshots
/// taken at lending time (message-passing actors own their records, so the
/// ledger cannot borrow into the other registries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub patron_key: String,
    /// The registered display name, canonical casing.
    pub patron_name: String,
    pub isbn: String,
    pub title: String,
    pub borrowed_at: DateTime<Utc>,
}

/// Payload for lending one copy of `isbn` to the named patron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanCreate {
    pub patron_name: String,
    pub isbn: String,
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patron: {} | Book: {} | Date: {}",
            self.patron_name,
            self.title,
            self.borrowed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
