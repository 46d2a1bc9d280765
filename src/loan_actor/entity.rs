//! Entity trait implementation for the Loan record.
//!
//! The lending policy lives here: the [`Entity::on_create`] hook resolves the
//! patron and checks one copy out of the catalog before the entry is admitted
//! to the ledger. A failure at any step leaves the ledger untouched.

use super::error::LoanError;
use crate::clients::{ActorClient, CatalogClient, PatronClient};
use crate::framework::Entity;
use crate::model::{Loan, LoanCreate};
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

#[async_trait]
impl Entity for Loan {
    type Key = String;
    type CreateParams = LoanCreate;
    type Action = ();
    type ActionResult = ();
    type Context = (PatronClient, CatalogClient);
    type Error = LoanError;

    /// Builds the skeleton entry. The patron key, canonical name and book
    /// title are filled in by `on_create` once both lookups succeed.
    fn from_create_params(params: LoanCreate) -> Result<Self, LoanError> {
        Ok(Self {
            patron_key: String::new(),
            patron_name: params.patron_name,
            isbn: params.isbn,
            title: String::new(),
            borrowed_at: Utc::now(),
        })
    }

    /// Ledger entries answer to the patron's name, case-insensitively.
    fn matches(&self, name: &String) -> bool {
        self.patron_name.to_lowercase() == name.to_lowercase()
    }

    /// Runs the lending policy inside the ledger's task.
    ///
    /// 1. Resolve the patron by name; absence is a recoverable
    ///    [`LoanError::PatronNotFound`].
    /// 2. Check one copy out of the catalog. The catalog registry performs
    ///    the availability check and the decrement in a single action, so the
    ///    copy counter can never be driven below zero by racing lends.
    /// 3. Fill in the resolved snapshot fields.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), LoanError> {
        let (patrons, catalog) = ctx;

        let patron = patrons
            .find(self.patron_name.clone())
            .await?
            .ok_or_else(|| LoanError::PatronNotFound(self.patron_name.clone()))?;
        debug!(patron = %patron.name, "Patron resolved");

        let book = catalog.check_out(self.isbn.clone()).await?;
        debug!(isbn = %book.isbn, remaining = book.available_copies, "Copy checked out");

        // The lookup was case-insensitive; the ledger keeps the registered name.
        self.patron_key = patron.key;
        self.patron_name = patron.name;
        self.title = book.title;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), LoanError> {
        Ok(())
    }
}
