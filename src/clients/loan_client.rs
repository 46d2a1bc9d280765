use crate::clients::actor_client::ActorClient;
use crate::framework::{RegistryClient, RegistryError};
use crate::loan_actor::LoanError;
use crate::model::{Loan, LoanCreate};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the loan ledger.
///
/// The lending policy (patron resolution, copy checkout) runs in the loan
/// registry's `on_create` hook, not here.
#[derive(Clone)]
pub struct LoanClient {
    inner: RegistryClient<Loan>,
}

impl LoanClient {
    pub fn new(inner: RegistryClient<Loan>) -> Self {
        Self { inner }
    }

    /// Lends one copy of the ISBN to the named patron.
    ///
    /// On success the returned entry carries the patron's registered name in
    /// canonical casing, which is what callers should report.
    #[instrument(skip(self))]
    pub async fn lend(&self, patron_name: String, isbn: String) -> Result<Loan, LoanError> {
        info!("Sending lend to ledger");

        let payload = LoanCreate { patron_name, isbn };
        self.inner.register(payload).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Loan> for LoanClient {
    type Error = LoanError;

    fn inner(&self) -> &RegistryClient<Loan> {
        &self.inner
    }

    fn map_error(e: RegistryError<LoanError>) -> LoanError {
        match e {
            RegistryError::Entity(e) => e,
            other => LoanError::Channel(other.to_string()),
        }
    }
}
