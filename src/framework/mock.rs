//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Instead of spinning up a full [`RegistryActor`](crate::framework::RegistryActor),
//! a [`MockClient`] replays scripted responses. Queue expectations with
//! [`MockClient::expect_register`], [`MockClient::expect_find`],
//! [`MockClient::expect_list`] or [`MockClient::expect_action`], hand out
//! [`MockClient::client`], then assert completeness with [`MockClient::verify`].

use crate::framework::{Entity, RegistryClient, RegistryError, RegistryRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<T: Entity> {
    Register {
        response: Result<T, RegistryError<T::Error>>,
    },
    Find {
        key: T::Key,
        response: Result<Option<T>, RegistryError<T::Error>>,
    },
    List {
        response: Result<Vec<T>, RegistryError<T::Error>>,
    },
    Action {
        key: T::Key,
        response: Result<T::ActionResult, RegistryError<T::Error>>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Patron>::new();
/// mock.expect_find("Ada".to_string()).return_ok(Some(patron));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Entity> {
    client: RegistryClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// A request arriving with no matching expectation queued panics the
    /// background task, which surfaces as an error on the caller's channel.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RegistryRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before async operations

                match (request, expectation) {
                    (
                        RegistryRequest::Register { params: _, respond_to },
                        Some(Expectation::Register { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Find { key: _, respond_to },
                        Some(Expectation::Find { key: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Action {
                            key: _,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { key: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: RegistryClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RegistryClient<T> {
        self.client.clone()
    }

    /// Expects a `register` operation.
    pub fn expect_register(&mut self) -> RegisterExpectationBuilder<T> {
        RegisterExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self, key: T::Key) -> FindExpectationBuilder<T> {
        FindExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, key: T::Key) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `register` expectations.
pub struct RegisterExpectationBuilder<T: Entity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> RegisterExpectationBuilder<T> {
    /// Sets the expectation to return the stored record.
    pub fn return_ok(self, record: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Register {
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RegistryError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Register {
            response: Err(error),
        });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder<T: Entity> {
    key: T::Key,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> FindExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Find {
            key: self.key,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RegistryError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Find {
            key: self.key,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Entity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> ListExpectationBuilder<T> {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, entries: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Ok(entries),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: Entity> {
    key: T::Key,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            key: self.key,
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RegistryError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            key: self.key,
            response: Err(error),
        });
    }
}
