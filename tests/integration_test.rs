use lending_desk::catalog_actor::CatalogError;
use lending_desk::clients::ActorClient;
use lending_desk::lifecycle::LibrarySystem;
use lending_desk::loan_actor::LoanError;
use lending_desk::model::{BookCreate, PatronCreate};

fn book(isbn: &str, title: &str, copies: i32) -> BookCreate {
    BookCreate {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: "Ursula K. Le Guin".to_string(),
        copies,
    }
}

fn patron(key: &str, name: &str) -> PatronCreate {
    PatronCreate {
        key: key.to_string(),
        name: name.to_string(),
        program: "Linguistics".to_string(),
        term: 3,
    }
}

/// Full end-to-end flow with all real registries: register, lend until the
/// stock runs dry, and verify the ledger.
#[tokio::test]
async fn lend_until_stock_is_exhausted() {
    let system = LibrarySystem::new();

    system
        .patron_client
        .register_patron(patron("A-01", "Alice"))
        .await
        .expect("Failed to register patron");

    let stored = system
        .catalog_client
        .register_book(book("978-1", "The Dispossessed", 2))
        .await
        .expect("Failed to register book");
    assert_eq!(stored.available_copies, 2);

    // Two copies admit exactly two loans.
    for expected_remaining in [1u32, 0] {
        let loan = system
            .loan_client
            .lend("Alice".to_string(), "978-1".to_string())
            .await
            .expect("Lend should succeed while copies remain");
        assert_eq!(loan.patron_name, "Alice");
        assert_eq!(loan.patron_key, "A-01");
        assert_eq!(loan.title, "The Dispossessed");

        let current = system
            .catalog_client
            .find_book("978-1".to_string())
            .await
            .unwrap();
        assert_eq!(current.available_copies, expected_remaining);
    }

    // The third request finds no copies and must not touch the ledger.
    let err = system
        .loan_client
        .lend("Alice".to_string(), "978-1".to_string())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LoanError::BookUnavailable("The Dispossessed".to_string())
    );

    let loans = system.loan_client.list().await.unwrap();
    assert_eq!(loans.len(), 2);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn lend_with_unknown_isbn_mutates_nothing() {
    let system = LibrarySystem::new();

    system
        .patron_client
        .register_patron(patron("A-01", "Alice"))
        .await
        .unwrap();
    system
        .catalog_client
        .register_book(book("978-1", "The Dispossessed", 1))
        .await
        .unwrap();

    let err = system
        .loan_client
        .lend("Alice".to_string(), "978-404".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, LoanError::BookNotFound("978-404".to_string()));

    // The registered book is untouched and no loan exists.
    let current = system
        .catalog_client
        .find_book("978-1".to_string())
        .await
        .unwrap();
    assert_eq!(current.available_copies, 1);
    assert!(system.loan_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn lend_with_unknown_patron_mutates_nothing() {
    let system = LibrarySystem::new();

    system
        .catalog_client
        .register_book(book("978-1", "The Dispossessed", 1))
        .await
        .unwrap();

    let err = system
        .loan_client
        .lend("Nobody".to_string(), "978-1".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, LoanError::PatronNotFound("Nobody".to_string()));

    // The patron is resolved before the catalog is touched.
    let current = system
        .catalog_client
        .find_book("978-1".to_string())
        .await
        .unwrap();
    assert_eq!(current.available_copies, 1);
    assert!(system.loan_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn patron_lookup_ignores_case_and_keeps_canonical_name() {
    let system = LibrarySystem::new();

    system
        .patron_client
        .register_patron(patron("A-22", "Ana López"))
        .await
        .unwrap();
    system
        .catalog_client
        .register_book(book("978-2", "Siddhartha", 1))
        .await
        .unwrap();

    let found = system
        .patron_client
        .find_patron("ana lópez".to_string())
        .await
        .unwrap();
    assert_eq!(found.map(|p| p.name), Some("Ana López".to_string()));

    // The ledger records the registered casing, not the typed one.
    let loan = system
        .loan_client
        .lend("ANA LÓPEZ".to_string(), "978-2".to_string())
        .await
        .unwrap();
    assert_eq!(loan.patron_name, "Ana López");
}

#[tokio::test]
async fn duplicate_isbns_resolve_to_first_registration() {
    let system = LibrarySystem::new();

    system
        .patron_client
        .register_patron(patron("A-01", "Alice"))
        .await
        .unwrap();
    system
        .catalog_client
        .register_book(book("978-9", "First Entry", 1))
        .await
        .unwrap();
    system
        .catalog_client
        .register_book(book("978-9", "Second Entry", 5))
        .await
        .unwrap();

    let found = system
        .catalog_client
        .find_book("978-9".to_string())
        .await
        .unwrap();
    assert_eq!(found.title, "First Entry");

    // Lending drains the first entry and never falls through to the second.
    system
        .loan_client
        .lend("Alice".to_string(), "978-9".to_string())
        .await
        .unwrap();
    let err = system
        .loan_client
        .lend("Alice".to_string(), "978-9".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, LoanError::BookUnavailable("First Entry".to_string()));

    let books = system.catalog_client.list().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].available_copies, 0);
    assert_eq!(books[1].available_copies, 5);
}

#[tokio::test]
async fn report_on_empty_system_yields_empty_snapshots() {
    let system = LibrarySystem::new();

    let (books, loans) = system.report().await.unwrap();
    assert!(books.is_empty());
    assert!(loans.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn report_lists_entries_in_insertion_order() {
    let system = LibrarySystem::new();

    system
        .patron_client
        .register_patron(patron("A-01", "Alice"))
        .await
        .unwrap();
    for (isbn, title) in [("978-1", "The Dispossessed"), ("978-2", "Siddhartha")] {
        system
            .catalog_client
            .register_book(book(isbn, title, 1))
            .await
            .unwrap();
    }
    system
        .loan_client
        .lend("Alice".to_string(), "978-2".to_string())
        .await
        .unwrap();

    let (books, loans) = system.report().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].isbn, "978-1");
    assert_eq!(books[1].isbn, "978-2");
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].title, "Siddhartha");
}

#[tokio::test]
async fn returned_copies_are_uncapped() {
    let system = LibrarySystem::new();

    system
        .catalog_client
        .register_book(book("978-3", "Walden", 1))
        .await
        .unwrap();

    // Returns are not reconciled against loans; the counter just grows.
    for expected in [2u32, 3, 4] {
        let updated = system
            .catalog_client
            .return_copy("978-3".to_string())
            .await
            .unwrap();
        assert_eq!(updated.available_copies, expected);
    }

    let err = system
        .catalog_client
        .return_copy("978-404".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, CatalogError::NotFound("978-404".to_string()));
}

#[tokio::test]
async fn registration_validation_is_asymmetric() {
    let system = LibrarySystem::new();

    // Books validate every field.
    let err = system
        .catalog_client
        .register_book(book("", "The Dispossessed", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBook(_)));

    let err = system
        .catalog_client
        .register_book(book("978-1", "The Dispossessed", -2))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBook(_)));

    // Zero copies is a valid registration.
    system
        .catalog_client
        .register_book(book("978-1", "The Dispossessed", 0))
        .await
        .unwrap();

    // Patrons only validate the term range; empty text fields pass.
    let err = system
        .patron_client
        .register_patron(PatronCreate {
            term: 13,
            ..patron("A-01", "Alice")
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid patron data: term must be between 1 and 12"
    );

    system
        .patron_client
        .register_patron(PatronCreate {
            key: String::new(),
            name: String::new(),
            program: String::new(),
            term: 1,
        })
        .await
        .unwrap();

    let books = system.catalog_client.list().await.unwrap();
    assert_eq!(books.len(), 1);
}

/// Concurrent lends against limited stock: the catalog registry serializes
/// the check-and-decrement, so exactly as many loans succeed as there are
/// copies.
#[tokio::test]
async fn concurrent_lends_respect_stock() {
    let system = LibrarySystem::new();

    system
        .patron_client
        .register_patron(patron("A-01", "Alice"))
        .await
        .unwrap();
    system
        .catalog_client
        .register_book(book("978-5", "Limited Edition", 2))
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..5 {
        let loan_client = system.loan_client.clone();
        handles.push(tokio::spawn(async move {
            loan_client
                .lend("Alice".to_string(), "978-5".to_string())
                .await
        }));
    }

    let mut successful = 0;
    let mut unavailable = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(LoanError::BookUnavailable(title)) => {
                assert_eq!(title, "Limited Edition");
                unavailable += 1;
            }
            Err(other) => panic!("Unexpected lend failure: {:?}", other),
        }
    }

    assert_eq!(successful, 2, "Expected exactly one loan per copy");
    assert_eq!(unavailable, 3);

    let remaining = system
        .catalog_client
        .find_book("978-5".to_string())
        .await
        .unwrap();
    assert_eq!(remaining.available_copies, 0);
    assert_eq!(system.loan_client.list().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}
