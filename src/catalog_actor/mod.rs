//! Catalog-specific registry logic, including copy-stock actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::RegistryActor;
use crate::model::Book;

/// Creates a new catalog registry and its client.
pub fn new() -> (RegistryActor<Book>, CatalogClient) {
    let (actor, generic_client) = RegistryActor::new(32);
    let client = CatalogClient::new(generic_client);

    (actor, client)
}
