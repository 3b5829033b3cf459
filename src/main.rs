//! Theater Billing CLI
//!
//! Loads a play catalog and a customer's performances from CSV files and
//! prints the billing statement.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- BigCo plays.csv performances.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace per-performance pricing

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;
use theater_billing::{BillingError, Invoice, PlayCatalog, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(BillingError::MissingArgument);
    }

    let customer = args[1].as_str();
    let plays_file = File::open(&args[2])?;
    let catalog = PlayCatalog::from_csv(BufReader::new(plays_file))?;

    let performances_file = File::open(&args[3])?;
    let invoice = Invoice::from_csv(customer, BufReader::new(performances_file))?;

    let report = theater_billing::generate(&invoice, &catalog)?;
    print!("{}", report);

    Ok(())
}
