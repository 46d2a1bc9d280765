//! Patron-specific registry logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PatronClient;
use crate::framework::RegistryActor;
use crate::model::Patron;

/// Creates a new patron registry and its client.
pub fn new() -> (RegistryActor<Patron>, PatronClient) {
    let (actor, generic_client) = RegistryActor::new(32);
    let client = PatronClient::new(generic_client);

    (actor, client)
}
