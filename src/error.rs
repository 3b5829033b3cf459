//! Error types for statement generation.

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur while loading billing data or generating a statement.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A performance references a play id absent from the catalog
    #[error("play not found: {play_id}")]
    PlayNotFound { play_id: String },

    /// A play carries a genre outside the known set
    #[error("unknown genre: {genre}")]
    UnknownGenre { genre: String },

    /// Two catalog entries share the same play id
    #[error("duplicate play in catalog: {play_id}")]
    DuplicatePlay { play_id: String },

    /// Missing command-line arguments
    #[error("Missing arguments. Usage: theater-billing <customer> <plays.csv> <performances.csv>")]
    MissingArgument,
}
