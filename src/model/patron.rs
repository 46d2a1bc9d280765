use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered library patron.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`RegistryActor`](crate::framework::RegistryActor).
///
/// The display name is the lookup key, compared case-insensitively. Neither
/// the key nor the name is required to be unique; duplicates resolve to the
/// first registered entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patron {
    pub key: String,
    pub name: String,
    pub program: String,
    /// Enrollment term, 1 through 12.
    pub term: u8,
}

/// Payload for registering a patron.
///
/// `term` stays signed for the same reason as a book's copy count: an
/// out-of-range number is a domain validation failure, not a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatronCreate {
    pub key: String,
    pub name: String,
    pub program: String,
    pub term: i32,
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: {:<10} | Name: {:<20} | Program: {:<15} | Term: {}",
            self.key, self.name, self.program, self.term
        )
    }
}
