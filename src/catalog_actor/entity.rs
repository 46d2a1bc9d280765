//! Entity trait implementation for the Book record.
//!
//! This module contains the [`Entity`] trait implementation that enables
//! [`Book`] to be managed by the generic [`crate::framework::RegistryActor`],
//! including the stock actions used by the lending flow.

use super::actions::CatalogAction;
use super::error::CatalogError;
use crate::framework::Entity;
use crate::model::{Book, BookCreate};
use async_trait::async_trait;

#[async_trait]
impl Entity for Book {
    type Key = String;
    type CreateParams = BookCreate;
    type Action = CatalogAction;
    type ActionResult = Book;
    type Context = ();
    type Error = CatalogError;

    /// Validates the payload and builds the catalog entry.
    ///
    /// Every text field must be non-empty and the copy count non-negative.
    /// A count of zero is valid: the title is catalogued but nothing is
    /// lendable until copies are checked back in.
    fn from_create_params(params: BookCreate) -> Result<Self, CatalogError> {
        if params.isbn.is_empty() {
            return Err(CatalogError::InvalidBook("isbn must not be empty".to_string()));
        }
        if params.title.is_empty() {
            return Err(CatalogError::InvalidBook("title must not be empty".to_string()));
        }
        if params.author.is_empty() {
            return Err(CatalogError::InvalidBook(
                "author must not be empty".to_string(),
            ));
        }
        if params.copies < 0 {
            return Err(CatalogError::InvalidBook(
                "copies must not be negative".to_string(),
            ));
        }

        Ok(Self {
            isbn: params.isbn,
            title: params.title,
            author: params.author,
            available_copies: params.copies as u32,
        })
    }

    /// ISBN comparison is exact and case-sensitive.
    fn matches(&self, isbn: &String) -> bool {
        self.isbn == *isbn
    }

    /// Handles stock movements.
    ///
    /// # Actions
    /// - `CheckOut`: decrements the counter by one, failing when it is zero
    /// - `CheckIn`: increments the counter by one, uncapped
    async fn handle_action(&mut self, action: CatalogAction, _ctx: &()) -> Result<Book, CatalogError> {
        match action {
            CatalogAction::CheckOut => {
                if self.available_copies == 0 {
                    return Err(CatalogError::NoCopies(self.title.clone()));
                }
                self.available_copies -= 1;
                Ok(self.clone())
            }
            CatalogAction::CheckIn => {
                self.available_copies += 1;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(copies: i32) -> BookCreate {
        BookCreate {
            isbn: "978-0-441-47812-5".to_string(),
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            copies,
        }
    }

    #[test]
    fn registration_rejects_empty_fields() {
        for (field, payload) in [
            ("isbn", BookCreate { isbn: String::new(), ..draft(1) }),
            ("title", BookCreate { title: String::new(), ..draft(1) }),
            ("author", BookCreate { author: String::new(), ..draft(1) }),
        ] {
            match Book::from_create_params(payload) {
                Err(CatalogError::InvalidBook(msg)) => {
                    assert!(msg.contains(field), "message {:?} should name {}", msg, field)
                }
                other => panic!("Expected InvalidBook for empty {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn registration_rejects_negative_copies() {
        match Book::from_create_params(draft(-1)) {
            Err(CatalogError::InvalidBook(msg)) => assert!(msg.contains("copies")),
            other => panic!("Expected InvalidBook, got {:?}", other),
        }
    }

    #[test]
    fn registration_accepts_zero_copies() {
        let book = Book::from_create_params(draft(0)).unwrap();
        assert_eq!(book.available_copies, 0);
    }

    #[test]
    fn isbn_match_is_case_sensitive() {
        let book = Book::from_create_params(draft(1)).unwrap();
        assert!(book.matches(&"978-0-441-47812-5".to_string()));
        assert!(!book.matches(&"978-0-441-47812-5 ".to_string()));
        assert!(!book.matches(&"978-0-441-47812-X".to_string()));
    }

    #[tokio::test]
    async fn check_out_decrements_by_one() {
        let mut book = Book::from_create_params(draft(2)).unwrap();
        let snapshot = book.handle_action(CatalogAction::CheckOut, &()).await.unwrap();
        assert_eq!(snapshot.available_copies, 1);
        assert_eq!(book.available_copies, 1);
    }

    #[tokio::test]
    async fn check_out_with_no_copies_fails() {
        let mut book = Book::from_create_params(draft(0)).unwrap();
        let err = book
            .handle_action(CatalogAction::CheckOut, &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::NoCopies("The Left Hand of Darkness".to_string())
        );
        assert_eq!(book.available_copies, 0);
    }

    #[tokio::test]
    async fn check_in_is_uncapped() {
        let mut book = Book::from_create_params(draft(1)).unwrap();
        for _ in 0..3 {
            book.handle_action(CatalogAction::CheckIn, &()).await.unwrap();
        }
        assert_eq!(book.available_copies, 4);
    }
}
