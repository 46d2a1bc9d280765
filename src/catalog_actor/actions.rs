//! Custom actions for the catalog registry.
//!
//! These are the stock movements on a [`Book`](crate::model::Book): the copy
//! counter is only ever touched through them, inside the catalog registry's
//! task, so the check-and-decrement on checkout is atomic with respect to
//! every other caller.

/// Stock operations on a catalogued book.
///
/// Both actions resolve against the first entry matching the requested ISBN
/// and return a snapshot of the book after the counter changed.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Takes one copy off the shelf for a loan.
    ///
    /// # Errors
    /// Fails when no copies are available; the counter is never driven
    /// below zero.
    CheckOut,
    /// Puts one copy back on the shelf.
    ///
    /// The counter is not capped at the registered copy count, so repeated
    /// check-ins can raise availability past any historical maximum.
    CheckIn,
}
