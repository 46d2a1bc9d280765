use crate::clients::actor_client::ActorClient;
use crate::framework::{RegistryClient, RegistryError};
use crate::model::{Patron, PatronCreate};
use crate::patron_actor::PatronError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the patron registry.
#[derive(Clone)]
pub struct PatronClient {
    inner: RegistryClient<Patron>,
}

impl PatronClient {
    pub fn new(inner: RegistryClient<Patron>) -> Self {
        Self { inner }
    }

    /// Registers a patron and returns the stored entry.
    #[instrument(skip(self, patron))]
    pub async fn register_patron(&self, patron: PatronCreate) -> Result<Patron, PatronError> {
        debug!(?patron, "Sending request");
        self.inner.register(patron).await.map_err(Self::map_error)
    }

    /// Case-insensitive first-match lookup by display name.
    ///
    /// Absence is data here: callers branch on the `Option` instead of
    /// handling an error. The lending flow turns `None` into its own failure.
    #[instrument(skip(self))]
    pub async fn find_patron(&self, name: String) -> Result<Option<Patron>, PatronError> {
        self.find(name).await
    }
}

#[async_trait]
impl ActorClient<Patron> for PatronClient {
    type Error = PatronError;

    fn inner(&self) -> &RegistryClient<Patron> {
        &self.inner
    }

    fn map_error(e: RegistryError<PatronError>) -> PatronError {
        match e {
            RegistryError::Entity(e) => e,
            other => PatronError::Channel(other.to_string()),
        }
    }
}
