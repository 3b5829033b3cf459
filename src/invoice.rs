//! Invoice and performance models plus the raw performance record format.

use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::io::Read;

/// A single billed performance: which play, and for how many seats.
///
/// The audience is an unsigned count, so a negative seat count cannot be
/// represented; a negative value in input fails at deserialization.
#[derive(Debug, Clone)]
pub struct Performance {
    /// Identifier of the performed play; must resolve in the catalog.
    pub play_id: String,

    /// Number of seats sold.
    pub audience: u32,
}

impl Performance {
    /// Creates a new performance.
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer invoice: an ordered sequence of performances.
///
/// Performance order determines the line order of the generated statement.
#[derive(Debug, Clone)]
pub struct Invoice {
    /// Customer name, printed in the statement header.
    pub customer: String,

    /// Billed performances in statement order.
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Creates a new invoice.
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }

    /// Loads an invoice from a `play,audience` CSV reader.
    ///
    /// Row order is preserved as performance order. Any malformed row aborts
    /// the load.
    pub fn from_csv<R: Read>(customer: impl Into<String>, reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut performances = Vec::new();
        for result in csv_reader.deserialize::<PerformanceRecord>() {
            let record = result?;
            performances.push(Performance::new(record.play, record.audience));
        }

        let invoice = Invoice::new(customer, performances);
        debug!(
            "Loaded invoice for {} with {} performances",
            invoice.customer,
            invoice.performances.len()
        );
        Ok(invoice)
    }
}

/// Raw performance row as read from CSV (`play,audience`).
#[derive(Debug, Deserialize)]
pub struct PerformanceRecord {
    /// Play identifier
    pub play: String,

    /// Seat count
    pub audience: u32,
}
