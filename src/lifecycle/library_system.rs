use tracing::{error, info};

use crate::clients::{ActorClient, CatalogClient, LoanClient, PatronClient};
use crate::model::{Book, Loan};

/// The main runtime orchestrator for the actor-based lending desk.
///
/// `LibrarySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all registries
/// - **Dependency Wiring**: Connecting registries that depend on each other
///   (the loan ledger needs the patron and catalog clients)
///
/// # Architecture
///
/// The system consists of three registries:
/// - **Catalog**: books with copy-stock tracking
/// - **Patrons**: registered borrowers
/// - **Loans**: the permanent ledger, which coordinates with the other two
///   when a lend is requested
///
/// # Example
///
/// ```ignore
/// let system = LibrarySystem::new();
///
/// // Use the clients to interact with the registries
/// system.catalog_client.register_book(book_data).await?;
/// system.patron_client.register_patron(patron_data).await?;
/// let loan = system.loan_client.lend(name, isbn).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct LibrarySystem {
    /// Client for interacting with the catalog registry
    pub catalog_client: CatalogClient,

    /// Client for interacting with the patron registry
    pub patron_client: PatronClient,

    /// Client for interacting with the loan ledger
    pub loan_client: LoanClient,

    /// Task handles for all running registries (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LibrarySystem {
    /// Creates and initializes a new `LibrarySystem` with all registries running.
    ///
    /// # Returns
    ///
    /// A fully initialized `LibrarySystem` with every registry running and
    /// ready to accept requests. All collections start empty.
    pub fn new() -> Self {
        // 1. Create registries (no dependencies)
        let (catalog_actor, catalog_client) = crate::catalog_actor::new();
        let (patron_actor, patron_client) = crate::patron_actor::new();
        let (loan_actor, loan_client) = crate::loan_actor::new();

        // 2. Start registries with injected context
        // Catalog and Patrons have no dependencies (Context = ())
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let patron_handle = tokio::spawn(patron_actor.run(()));

        // The loan ledger resolves patrons and checks out copies, so it runs
        // with both clients as its context (Context = (PatronClient, CatalogClient))
        let loan_handle = tokio::spawn(loan_actor.run((
            patron_client.clone(),
            catalog_client.clone(),
        )));

        Self {
            catalog_client,
            patron_client,
            loan_client,
            handles: vec![catalog_handle, patron_handle, loan_handle],
        }
    }

    /// Snapshot of the catalog and the loan ledger, in insertion order.
    ///
    /// Empty collections are a valid, reportable state, not a failure.
    pub async fn report(&self) -> Result<(Vec<Book>, Vec<Loan>), String> {
        let books = self
            .catalog_client
            .list()
            .await
            .map_err(|e| e.to_string())?;
        let loans = self.loan_client.list().await.map_err(|e| e.to_string())?;
        Ok((books, loans))
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each `RegistryActor`
    /// detects the closed channel and exits its event loop. The method then
    /// waits for all registry tasks to complete.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all registries shut down cleanly
    /// - `Err(String)` if any registry task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Step 1: Close all channels by dropping clients
        drop(self.loan_client);
        drop(self.patron_client);
        drop(self.catalog_client);

        // Step 2: Wait for all registry tasks to complete
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Registry task failed: {:?}", e);
                return Err(format!("Registry task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
