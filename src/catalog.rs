//! Play catalog: a read-only lookup store over a fixed set of plays.

use crate::error::{BillingError, Result};
use crate::play::{Play, PlayRecord};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::HashMap;
use std::io::Read;

/// Maps play identifiers to their definitions.
///
/// The catalog is filled once and then only read; statement generation never
/// mutates it, so any number of concurrent lookups are safe.
#[derive(Debug, Default)]
pub struct PlayCatalog {
    /// Plays indexed by id.
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        PlayCatalog {
            plays: HashMap::new(),
        }
    }

    /// Adds a play to the catalog.
    ///
    /// Fails with [`BillingError::DuplicatePlay`] if a play with the same id
    /// is already present; a performance must resolve to exactly one play.
    pub fn insert(&mut self, play: Play) -> Result<()> {
        if self.plays.contains_key(&play.id) {
            return Err(BillingError::DuplicatePlay { play_id: play.id });
        }
        self.plays.insert(play.id.clone(), play);
        Ok(())
    }

    /// Resolves a play id to its definition.
    ///
    /// Fails with [`BillingError::PlayNotFound`] when no play in the catalog
    /// has that identifier.
    pub fn resolve(&self, play_id: &str) -> Result<&Play> {
        self.plays.get(play_id).ok_or_else(|| BillingError::PlayNotFound {
            play_id: play_id.to_string(),
        })
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns `true` if the catalog holds no plays.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Loads a catalog from a `play,genre` CSV reader.
    ///
    /// Rows are read one at a time. Any malformed row, unknown genre, or
    /// duplicate play id aborts the load; a statement run never starts from
    /// a partially loaded catalog.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut catalog = PlayCatalog::new();
        for result in csv_reader.deserialize::<PlayRecord>() {
            let record = result?;
            catalog.insert(record.parse()?)?;
        }

        debug!("Loaded {} plays into catalog", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Genre;
    use std::io::Cursor;

    #[test]
    fn test_resolve_known_play() {
        let mut catalog = PlayCatalog::new();
        catalog.insert(Play::new("hamlet", Genre::Tragedy)).unwrap();

        let play = catalog.resolve("hamlet").unwrap();
        assert_eq!(play.genre, Genre::Tragedy);
    }

    #[test]
    fn test_resolve_missing_play() {
        let catalog = PlayCatalog::new();
        let err = catalog.resolve("hamlet").unwrap_err();
        match err {
            BillingError::PlayNotFound { play_id } => assert_eq!(play_id, "hamlet"),
            other => panic!("Expected PlayNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut catalog = PlayCatalog::new();
        catalog.insert(Play::new("hamlet", Genre::Tragedy)).unwrap();

        let err = catalog.insert(Play::new("hamlet", Genre::Comedy)).unwrap_err();
        assert!(matches!(err, BillingError::DuplicatePlay { .. }));

        // The original entry is untouched.
        assert_eq!(catalog.resolve("hamlet").unwrap().genre, Genre::Tragedy);
    }

    #[test]
    fn test_from_csv() {
        let csv = "play,genre\nhamlet,tragedy\nas-like,comedy\n";
        let catalog = PlayCatalog::from_csv(Cursor::new(csv)).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("as-like").unwrap().genre, Genre::Comedy);
    }

    #[test]
    fn test_from_csv_trims_whitespace() {
        let csv = "play, genre\nhamlet, tragedy\n";
        let catalog = PlayCatalog::from_csv(Cursor::new(csv)).unwrap();

        assert_eq!(catalog.resolve("hamlet").unwrap().genre, Genre::Tragedy);
    }

    #[test]
    fn test_from_csv_aborts_on_unknown_genre() {
        let csv = "play,genre\nhamlet,tragedy\ncats,musical\n";
        let err = PlayCatalog::from_csv(Cursor::new(csv)).unwrap_err();

        assert!(matches!(err, BillingError::UnknownGenre { .. }));
    }

    #[test]
    fn test_from_csv_aborts_on_duplicate() {
        let csv = "play,genre\nhamlet,tragedy\nhamlet,comedy\n";
        let err = PlayCatalog::from_csv(Cursor::new(csv)).unwrap_err();

        assert!(matches!(err, BillingError::DuplicatePlay { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PlayCatalog::from_csv(Cursor::new("play,genre\n")).unwrap();
        assert!(catalog.is_empty());
    }
}
