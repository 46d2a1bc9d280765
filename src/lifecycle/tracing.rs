//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole system.
//!
//! ## What Gets Traced
//!
//! - **Registry Lifecycle**: startup, shutdown and final collection size
//! - **Record Operations**: Register, Find, List and custom Actions
//! - **Lend Flow**: hierarchical spans from the client call through patron
//!   resolution and copy checkout
//! - **Errors**: structured context with keys and failure reasons
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=lending_desk::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a successful lend looks like:
//!
//! ```text
//! INFO Sending lend to ledger
//! INFO Action ok key="978-1"
//! INFO Registered size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g. "lend:check_out")
        .init();
}
