//! Play definitions and the raw catalog record format.

use crate::error::BillingError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The pricing category of a play.
///
/// The set is closed: adding a genre means adding a variant here and a
/// pricing arm to match, rather than falling through a default branch.
/// Anything else read from input is rejected with
/// [`BillingError::UnknownGenre`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    /// Flat base charge with a surcharge above 30 seats.
    Tragedy,

    /// Base charge plus per-seat fee, with a surcharge above 20 seats.
    Comedy,
}

impl FromStr for Genre {
    type Err = BillingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(BillingError::UnknownGenre {
                genre: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genre::Tragedy => write!(f, "tragedy"),
            Genre::Comedy => write!(f, "comedy"),
        }
    }
}

/// A play definition: identifier plus pricing genre.
///
/// Immutable once created; owned by the catalog and only ever looked up.
#[derive(Debug, Clone)]
pub struct Play {
    /// Unique play identifier, referenced by performances.
    pub id: String,

    /// Pricing genre.
    pub genre: Genre,
}

impl Play {
    /// Creates a new play definition.
    pub fn new(id: impl Into<String>, genre: Genre) -> Self {
        Play {
            id: id.into(),
            genre,
        }
    }
}

/// Raw catalog row as read from CSV (`play,genre`).
#[derive(Debug, Deserialize)]
pub struct PlayRecord {
    /// Play identifier
    pub play: String,

    /// Genre name, validated against the known set on parse
    pub genre: String,
}

impl PlayRecord {
    /// Parses the raw row into a typed [`Play`].
    ///
    /// Fails with [`BillingError::UnknownGenre`] for a genre outside the
    /// known set.
    pub fn parse(&self) -> std::result::Result<Play, BillingError> {
        let genre = self.genre.parse::<Genre>()?;
        Ok(Play::new(self.play.trim(), genre))
    }
}
