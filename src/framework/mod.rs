//! Generic actor framework for insertion-ordered record registries.
//!
//! This module provides the core building blocks for creating type-safe actor
//! systems that manage record collections with registration, lookup and
//! custom actions.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be managed by registries
//! - [`RegistryActor`] - Generic actor that owns one ordered collection
//! - [`RegistryClient`] - Type-safe client half of a registry
//! - [`RegistryError`] - Common error envelope
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full
//! registries.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
