//! Type-safe wrappers around [`RegistryClient`](crate::framework::RegistryClient).

pub mod actor_client;
pub mod catalog_client;
pub mod loan_client;
pub mod patron_client;

pub use actor_client::*;
pub use catalog_client::*;
pub use loan_client::*;
pub use patron_client::*;
