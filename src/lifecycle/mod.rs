//! Orchestration layer: registry startup, dependency wiring and shutdown.

pub mod library_system;
pub mod tracing;

pub use library_system::LibrarySystem;
pub use self::tracing::setup_tracing;
