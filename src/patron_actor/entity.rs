//! Entity trait implementation for the Patron record.
//!
//! This module contains the [`Entity`] trait implementation that enables
//! [`Patron`] to be managed by the generic [`crate::framework::RegistryActor`].

use super::error::PatronError;
use crate::framework::Entity;
use crate::model::{Patron, PatronCreate};
use async_trait::async_trait;

#[async_trait]
impl Entity for Patron {
    type Key = String;
    type CreateParams = PatronCreate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = PatronError;

    /// Validates the payload and builds the registry entry.
    ///
    /// The term range is the only constraint on registration; key, name and
    /// program are accepted as given, empty or not.
    fn from_create_params(params: PatronCreate) -> Result<Self, PatronError> {
        if !(1..=12).contains(&params.term) {
            return Err(PatronError::InvalidPatron(
                "term must be between 1 and 12".to_string(),
            ));
        }

        Ok(Self {
            key: params.key,
            name: params.name,
            program: params.program,
            term: params.term as u8,
        })
    }

    /// Name comparison ignores case. Registered names carry accents, so this
    /// is full Unicode lowercasing rather than the ASCII shortcut.
    fn matches(&self, name: &String) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), PatronError> {
        Ok(())
    }
}
