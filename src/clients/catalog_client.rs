use crate::catalog_actor::{CatalogAction, CatalogError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{RegistryClient, RegistryError};
use crate::model::{Book, BookCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog registry.
#[derive(Clone)]
pub struct CatalogClient {
    inner: RegistryClient<Book>,
}

impl CatalogClient {
    pub fn new(inner: RegistryClient<Book>) -> Self {
        Self { inner }
    }

    /// Adds a title to the catalog and returns the stored entry.
    ///
    /// Duplicate ISBNs are accepted; each registration is an independent
    /// entry and lookups resolve to the earliest one.
    #[instrument(skip(self, book))]
    pub async fn register_book(&self, book: BookCreate) -> Result<Book, CatalogError> {
        debug!(?book, "Sending request");
        self.inner.register(book).await.map_err(Self::map_error)
    }

    /// Looks up a title by exact ISBN.
    ///
    /// Unlike patron lookup, an unknown ISBN here is an error rather than an
    /// absence; the error message names the ISBN that was asked for.
    #[instrument(skip(self))]
    pub async fn find_book(&self, isbn: String) -> Result<Book, CatalogError> {
        self.find(isbn.clone())
            .await?
            .ok_or(CatalogError::NotFound(isbn))
    }

    /// Takes one copy of the ISBN off the shelf and returns the updated entry.
    #[instrument(skip(self))]
    pub async fn check_out(&self, isbn: String) -> Result<Book, CatalogError> {
        debug!("Sending request");
        self.inner
            .perform_action(isbn, CatalogAction::CheckOut)
            .await
            .map_err(Self::map_error)
    }

    /// Puts one copy of the ISBN back on the shelf.
    ///
    /// Returns are not reconciled against the loan ledger and the counter is
    /// not capped, so repeated calls can raise availability past the
    /// registered copy count.
    #[instrument(skip(self))]
    pub async fn return_copy(&self, isbn: String) -> Result<Book, CatalogError> {
        debug!("Sending request");
        self.inner
            .perform_action(isbn, CatalogAction::CheckIn)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Book> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &RegistryClient<Book> {
        &self.inner
    }

    fn map_error(e: RegistryError<CatalogError>) -> CatalogError {
        match e {
            RegistryError::Entity(e) => e,
            RegistryError::NoMatch(isbn) => CatalogError::NotFound(isbn),
            other => CatalogError::Channel(other.to_string()),
        }
    }
}
