//! # Theater Billing
//!
//! Generates billing statements for theater performance invoices: each
//! performance is resolved against a play catalog, priced by genre-specific
//! rules, and rendered as a report line with a cumulative total and a
//! loyalty "volume credit" score.
//!
//! ## Design Principles
//!
//! - **Integer money**: all charges are computed in whole cents; division
//!   by 100 happens only when formatting for display
//! - **Closed genre set**: genres are an exhaustively matched enum, and
//!   unknown genre strings are rejected at the input boundary
//! - **Fail whole**: a missing play or unknown genre aborts the entire
//!   statement; no partial report is ever produced
//!
//! ## Example
//!
//! ```
//! use theater_billing::{Genre, Invoice, Performance, Play, PlayCatalog};
//!
//! let mut catalog = PlayCatalog::new();
//! catalog.insert(Play::new("hamlet", Genre::Tragedy)).unwrap();
//!
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//! let report = theater_billing::generate(&invoice, &catalog).unwrap();
//! assert!(report.starts_with("Statement for BigCo"));
//! ```

pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod play;
pub mod pricing;
pub mod statement;

pub use catalog::PlayCatalog;
pub use error::{BillingError, Result};
pub use invoice::{Invoice, Performance, PerformanceRecord};
pub use money::Cents;
pub use play::{Genre, Play, PlayRecord};
pub use pricing::{price, LineResult};
pub use statement::generate;
