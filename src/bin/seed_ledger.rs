use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use centsible::{LedgerFile, Transaction, TransactionKind, TransactionStore};

/// A utility for creating a ledger file with demo data for Centsible.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the ledger file to.
    #[arg(long, short, default_value = "budget.json")]
    output_path: String,
}

/// Create and populate a ledger file for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating ledger file at {output_path:#?}");

    let mut store = TransactionStore::new();

    let demo_entries = [
        ("Salary", 4200.0, "Work", TransactionKind::Income),
        ("Rent", 1800.0, "Housing", TransactionKind::Expense),
        ("Groceries", 136.55, "Food", TransactionKind::Expense),
        ("Coffee", 4.5, "Food", TransactionKind::Expense),
        ("Power bill", 98.2, "Utilities", TransactionKind::Expense),
    ];

    for (description, amount, category, kind) in demo_entries {
        store.add(Transaction::build(description, amount, category, kind))?;
    }

    LedgerFile::new(output_path).save(store.list())?;

    println!("Success!");

    Ok(())
}
