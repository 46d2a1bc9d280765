//! # Lending Desk
//!
//! > **An in-memory library catalog manager built on resource-oriented actors.**
//!
//! This crate tracks books, registered patrons and a permanent loan ledger,
//! and exposes the whole thing through typed clients. A line-oriented
//! interactive menu (the `lending-desk` binary) drives it, but every
//! operation is a plain library call and can be used without the shell.
//!
//! ## Design
//!
//! Each of the three collections is owned exclusively by one Tokio task (a
//! *registry actor*) and reached only through message passing. The actors
//! process requests sequentially, so no collection ever needs a lock, and the
//! read-then-write on a book's copy counter during a lend happens inside the
//! catalog actor as a single action. The counter can never go negative, no
//! matter how many lends race.
//!
//! Collections are insertion-ordered `Vec`s with linear-scan lookup.
//! Duplicate keys are allowed everywhere; the first match wins. The expected
//! scale is a front desk, not a national archive.
//!
//! ## Error Handling
//!
//! Every failure a caller can provoke is a typed, recoverable error:
//! [`CatalogError`](catalog_actor::CatalogError),
//! [`PatronError`](patron_actor::PatronError) and
//! [`LoanError`](loan_actor::LoanError). A lend against an unknown patron is
//! an ordinary `LoanError::PatronNotFound`, reported and survived like any
//! other. Patron lookup itself returns an `Option`: absence there is data,
//! and only the lending flow promotes it to a failure.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic `RegistryActor<T>` engine and its
//!   [`Entity`](framework::Entity) contract, plus mock clients for tests.
//! - [`model`]: the `Book`, `Patron` and `Loan` records with their payloads.
//! - [`catalog_actor`], [`patron_actor`], [`loan_actor`]: the concrete
//!   registries. The lending policy lives in the loan ledger's create hook.
//! - [`clients`]: typed wrappers hiding the message passing.
//! - [`lifecycle`]: [`LibrarySystem`](lifecycle::LibrarySystem) wiring and
//!   tracing setup.
//!
//! ## Running the Shell
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod loan_actor;
pub mod model;
pub mod patron_actor;
