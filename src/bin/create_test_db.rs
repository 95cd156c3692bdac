use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use finance_tracker::{
    SQLiteTransactionStore, TransactionForm, TransactionRepository, initialize_db,
};

/// A utility for creating a test database for the finance tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const DEMO_TRANSACTIONS: [(&str, &str, &str); 6] = [
    ("income", "3200.00", "Salary"),
    ("expense", "1450.00", "Rent"),
    ("expense", "182.35", "Groceries"),
    ("expense", "64.99", "Power bill"),
    ("income", "120.00", "Sold old bike"),
    ("expense", "23.50", "Lunch with friends"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating demo transactions...");

    let repository =
        TransactionRepository::new(SQLiteTransactionStore::new(Arc::new(Mutex::new(conn))));

    for (type_, amount, description) in DEMO_TRANSACTIONS {
        repository.create(&TransactionForm {
            type_: Some(type_.to_owned()),
            amount: Some(amount.to_owned()),
            description: Some(description.to_owned()),
        })?;
    }

    println!("Success!");

    Ok(())
}
