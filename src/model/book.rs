use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalogued title together with its lendable stock.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`RegistryActor`](crate::framework::RegistryActor).
///
/// The ISBN is the lookup key. Uniqueness is not enforced: registering the
/// same ISBN twice yields two independent entries and lookups resolve to the
/// first one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Copies currently on the shelf. Cannot go negative; the checkout
    /// action refuses to take the last step below zero.
    pub available_copies: u32,
}

/// Payload for registering a book.
///
/// `copies` stays signed so that a negative count reaches domain validation
/// and is rejected there, instead of disappearing into a parse failure at the
/// input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub copies: i32,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.chars().count() > 20 {
            let short: String = self.title.chars().take(17).collect();
            format!("{short}...")
        } else {
            self.title.clone()
        };
        write!(
            f,
            "ISBN: {:<13} | Title: {:<20} | Author: {:<15} | Copies: {}",
            self.isbn, title, self.author, self.available_copies
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_truncates_long_titles() {
        let book = Book {
            isbn: "978-0-00".to_string(),
            title: "An Unreasonably Long Treatise on Shelving".to_string(),
            author: "N. Narrator".to_string(),
            available_copies: 2,
        };
        let line = book.to_string();
        assert!(line.contains("An Unreasonably L..."));
        assert!(line.ends_with("Copies: 2"));
    }

    #[test]
    fn display_keeps_short_titles_intact() {
        let book = Book {
            isbn: "978-0-01".to_string(),
            title: "Short".to_string(),
            author: "N. Narrator".to_string(),
            available_copies: 0,
        };
        assert!(book.to_string().contains("Title: Short"));
    }
}
