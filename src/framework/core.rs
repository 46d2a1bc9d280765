//! # Core Registry Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all registry record types must implement.
//! - [`RegistryActor`]: The generic actor that owns one ordered collection.
//! - [`RegistryClient`]: The generic client for communicating with a registry.
//! - [`RegistryError`]: The envelope carrying channel and domain failures.

use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be managed by a `RegistryActor`.
///
/// # Architecture Note
/// By defining a contract (`Entity`) that all our record types (Book, Patron,
/// Loan) must satisfy, we can write the `RegistryActor` logic *once* and reuse
/// it everywhere.
///
/// Associated types enforce type safety end to end: a book registry only
/// accepts book payloads and book actions, and the compiler rejects anything
/// else at the call site.
///
/// # Keys
/// Records carry *natural* keys (an ISBN, a display name) rather than
/// generated ids, and the registry never enforces uniqueness. [`Entity::matches`]
/// is the lookup predicate; the registry scans its entries in insertion order
/// and the first match wins.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can call other registries. The
/// `Context` type is injected into every hook at [`RegistryActor::run`] time,
/// which lets dependent registries receive their clients after construction.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// The lookup key for this record (e.g. an ISBN or a display name).
    type Key: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type CreateParams: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g. `CheckOut`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The domain error produced by validation, hooks and actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the creation payload, validating it.
    /// This is called synchronously before `on_create`.
    fn from_create_params(params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Lookup predicate used by the registry's linear scan.
    fn matches(&self, key: &Self::Key) -> bool;

    // --- Lifecycle Hook (Async) ---

    /// Called after validation and before the record is admitted to the
    /// collection. An error here discards the record entirely.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom record-specific action against the stored entry.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Failures crossing the registry boundary.
///
/// Channel problems (`Closed`, `Dropped`) and missing entries are framework
/// concerns; everything the entity itself rejects travels as `Entity` so
/// callers keep the full typed error.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Registry closed")]
    Closed,
    #[error("Registry dropped response channel")]
    Dropped,
    #[error("No entry matching key: {0}")]
    NoMatch(String),
    #[error("{0}")]
    Entity(E),
}

/// Type alias for the one-shot response channel used by registries.
pub type Response<V, E> = oneshot::Sender<Result<V, RegistryError<E>>>;

/// Internal message type sent to the registry to request operations.
///
/// Instead of ad-hoc messages per operation, every registry speaks the same
/// small vocabulary:
///
/// - **Register**: validate a payload and append the record.
/// - **Find**: first entry matching a key, in insertion order. Absence is
///   reported as data (`None`), never as an error; callers that treat a miss
///   as a failure do the conversion themselves.
/// - **List**: snapshot of the whole collection in insertion order.
/// - **Action**: run a record-specific operation against the first match.
#[derive(Debug)]
pub enum RegistryRequest<T: Entity> {
    Register {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Find {
        key: T::Key,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        key: T::Key,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the entries and the
/// receiver end of the channel.
///
/// **Storage model**: a plain `Vec` in insertion order. Duplicate keys are
/// permitted; lookups and actions resolve to the first match. The expected
/// scale is small and every access is a linear scan, so no index is kept.
///
/// **Concurrency Model**: each `RegistryActor` processes its own messages
/// sequentially in a loop, so the collection needs no lock. A read-then-write
/// sequence inside one `handle_action` call is atomic with respect to every
/// other caller.
pub struct RegistryActor<T: Entity> {
    receiver: mpsc::Receiver<RegistryRequest<T>>,
    entries: Vec<T>,
}

impl<T: Entity> RegistryActor<T> {
    pub fn new(buffer_size: usize) -> (Self, RegistryClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
        };
        let client = RegistryClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to reach external dependencies (like other clients) that were
    /// created *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Book" instead of "lending_desk::model::book::Book")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Registry started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Register { params, respond_to } => {
                    debug!(entity_type, ?params, "Register");

                    match T::from_create_params(params) {
                        Ok(mut entry) => {
                            // Await the async hook
                            if let Err(e) = entry.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(RegistryError::Entity(e)));
                                continue;
                            }
                            self.entries.push(entry.clone());
                            info!(entity_type, size = self.entries.len(), "Registered");
                            let _ = respond_to.send(Ok(entry));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Register rejected");
                            let _ = respond_to.send(Err(RegistryError::Entity(e)));
                        }
                    }
                }
                RegistryRequest::Find { key, respond_to } => {
                    let entry = self.entries.iter().find(|e| e.matches(&key)).cloned();
                    let found = entry.is_some();
                    debug!(entity_type, %key, found, "Find");
                    let _ = respond_to.send(Ok(entry));
                }
                RegistryRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entries.len(), "List");
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
                RegistryRequest::Action {
                    key,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %key, ?action, "Action");
                    if let Some(entry) = self.entries.iter_mut().find(|e| e.matches(&key)) {
                        // Await the async hook
                        let result = entry
                            .handle_action(action, &context)
                            .await
                            .map_err(RegistryError::Entity);
                        match &result {
                            Ok(_) => info!(entity_type, %key, "Action ok"),
                            Err(e) => warn!(entity_type, %key, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %key, "No match");
                        let _ = respond_to.send(Err(RegistryError::NoMatch(key.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `RegistryActor`.
#[derive(Clone)]
pub struct RegistryClient<T: Entity> {
    sender: mpsc::Sender<RegistryRequest<T>>,
}

impl<T: Entity> RegistryClient<T> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn register(&self, params: T::CreateParams) -> Result<T, RegistryError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Register { params, respond_to })
            .await
            .map_err(|_| RegistryError::Closed)?;
        response.await.map_err(|_| RegistryError::Dropped)?
    }

    pub async fn find(&self, key: T::Key) -> Result<Option<T>, RegistryError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Find { key, respond_to })
            .await
            .map_err(|_| RegistryError::Closed)?;
        response.await.map_err(|_| RegistryError::Dropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, RegistryError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::List { respond_to })
            .await
            .map_err(|_| RegistryError::Closed)?;
        response.await.map_err(|_| RegistryError::Dropped)?
    }

    pub async fn perform_action(
        &self,
        key: T::Key,
        action: T::Action,
    ) -> Result<T::ActionResult, RegistryError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Action {
                key,
                action,
                respond_to,
            })
            .await
            .map_err(|_| RegistryError::Closed)?;
        response.await.map_err(|_| RegistryError::Dropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
