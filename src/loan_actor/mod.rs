//! Loan ledger logic. The lending policy runs in this registry's create hook.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::LoanClient;
use crate::framework::RegistryActor;
use crate::model::Loan;

/// Creates a new loan ledger and its client.
///
/// The patron and catalog clients it depends on are injected later, as the
/// context passed to [`RegistryActor::run`].
pub fn new() -> (RegistryActor<Loan>, LoanClient) {
    let (actor, generic_client) = RegistryActor::new(32);
    let client = LoanClient::new(generic_client);

    (actor, client)
}
