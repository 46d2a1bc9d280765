//! Line-oriented interactive shell for the lending desk.
//!
//! The shell owns all input parsing: integer fields are parsed here and a
//! malformed number is reported as its own failure, so the registries only
//! ever see well-formed payloads. Every domain failure prints a distinct
//! message and the menu loop continues; nothing a user types can terminate
//! the process.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::error;

use lending_desk::catalog_actor::CatalogError;
use lending_desk::lifecycle::{setup_tracing, LibrarySystem};
use lending_desk::loan_actor::LoanError;
use lending_desk::model::{BookCreate, PatronCreate};
use lending_desk::patron_actor::PatronError;

type InputLines = Lines<BufReader<Stdin>>;

/// Prints a label without a newline and reads the next input line.
/// Returns `None` once stdin is exhausted.
async fn prompt(lines: &mut InputLines, label: &str) -> Option<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();
    lines.next_line().await.ok().flatten()
}

async fn register_book(system: &LibrarySystem, lines: &mut InputLines) {
    let Some(isbn) = prompt(lines, "ISBN: ").await else { return };
    let Some(title) = prompt(lines, "Title: ").await else { return };
    let Some(author) = prompt(lines, "Author: ").await else { return };
    let Some(copies_raw) = prompt(lines, "Number of copies: ").await else { return };

    // Parse at the boundary; the catalog never sees a malformed number.
    let copies: i32 = match copies_raw.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Format error: the number of copies must be an integer.");
            return;
        }
    };

    let payload = BookCreate {
        isbn,
        title,
        author,
        copies,
    };
    match system.catalog_client.register_book(payload).await {
        Ok(_) => println!("Book registered successfully."),
        Err(e @ CatalogError::InvalidBook(_)) => eprintln!("Argument error: {e}"),
        Err(e) => eprintln!("Unexpected system error: {e}"),
    }
}

async fn register_patron(system: &LibrarySystem, lines: &mut InputLines) {
    let Some(key) = prompt(lines, "Patron key: ").await else { return };
    let Some(name) = prompt(lines, "Name: ").await else { return };
    let Some(program) = prompt(lines, "Program: ").await else { return };
    let Some(term_raw) = prompt(lines, "Term (number): ").await else { return };

    let term: i32 = match term_raw.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Format error: the term must be a number.");
            return;
        }
    };

    let payload = PatronCreate {
        key,
        name,
        program,
        term,
    };
    match system.patron_client.register_patron(payload).await {
        Ok(_) => println!("Patron registered successfully."),
        Err(e @ PatronError::InvalidPatron(_)) => eprintln!("Data error: {e}"),
        Err(e) => eprintln!("Unexpected system error: {e}"),
    }
}

async fn lend_book(system: &LibrarySystem, lines: &mut InputLines) {
    let Some(patron_name) = prompt(lines, "Exact patron name: ").await else { return };
    let Some(isbn) = prompt(lines, "Book ISBN: ").await else { return };

    match system.loan_client.lend(patron_name, isbn).await {
        Ok(loan) => println!("Loan granted to {}.", loan.patron_name),
        Err(e @ LoanError::PatronNotFound(_)) => eprintln!("Patron error: {e}"),
        Err(e @ LoanError::BookNotFound(_)) => eprintln!("Lookup error: {e}"),
        Err(e @ LoanError::BookUnavailable(_)) => eprintln!("Stock alert: {e}"),
        Err(e) => eprintln!("Unexpected system error: {e}"),
    }
}

async fn show_report(system: &LibrarySystem) {
    match system.report().await {
        Ok((books, loans)) => {
            println!();
            println!("--- INVENTORY REPORT ---");
            if books.is_empty() {
                println!("No books registered.");
            }
            for book in &books {
                println!("{book}");
            }

            println!();
            println!("--- ACTIVE LOANS REPORT ---");
            if loans.is_empty() {
                println!("No loans recorded.");
            }
            for loan in &loans {
                println!("{loan}");
            }
            println!("------------------------------------");
        }
        Err(e) => eprintln!("Unexpected system error: {e}"),
    }
}

#[tokio::main]
async fn main() {
    setup_tracing();

    let system = LibrarySystem::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("=============================================");
    println!("            LENDING DESK CONSOLE             ");
    println!("=============================================");

    let mut exit = false;
    while !exit {
        println!();
        println!("MAIN MENU:");
        println!("1. Register book");
        println!("2. Register patron");
        println!("3. Lend a book");
        println!("4. Show report");
        println!("5. Exit");

        let Some(choice) = prompt(&mut lines, "Select an option: ").await else {
            // stdin closed; leave as if exit had been chosen
            break;
        };

        match choice.trim().parse::<i32>() {
            Err(_) => eprintln!("Error: the menu selection must be a number."),
            Ok(1) => register_book(&system, &mut lines).await,
            Ok(2) => register_patron(&system, &mut lines).await,
            Ok(3) => lend_book(&system, &mut lines).await,
            Ok(4) => show_report(&system).await,
            Ok(5) => exit = true,
            Ok(_) => println!("Invalid option. Try again."),
        }

        println!("[system]: operation processed.");
    }

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }
    println!("Leaving the system...");
}
