use crate::framework::{Entity, RegistryClient, RegistryError};
use async_trait::async_trait;

/// Trait for registry-specific clients to inherit the shared lookup operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `find` and `list`, the two operations every registry answers identically.
#[async_trait]
pub trait ActorClient<T: Entity>: Send + Sync {
    /// The registry-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RegistryClient.
    fn inner(&self) -> &RegistryClient<T>;

    /// Map framework errors to the specific registry error type.
    fn map_error(e: RegistryError<T::Error>) -> Self::Error;

    /// First entry matching the key, in insertion order. Absence is data.
    #[tracing::instrument(skip(self))]
    async fn find(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(key).await.map_err(Self::map_error)
    }

    /// Snapshot of every entry, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
