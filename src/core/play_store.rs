//! Play catalog storage
//!
//! This module provides the PlayStore component that holds the play catalog
//! for statement generation. The store enables per-performance play lookup
//! by play ID and is read-only once statement generation begins.
//!
//! # Catalog Validation
//!
//! Plays can be inserted directly as typed [`Play`] values, or built from
//! raw `(id, name, type string)` triples via [`PlayStore::from_raw`], which
//! rejects unrecognized play types up front so no statement computation
//! starts on an invalid catalog.

use crate::core::traits::PlayRepository;
use crate::types::{BillingError, Play, PlayId};
use std::collections::HashMap;

/// Play store backing statement generation
///
/// Maintains a HashMap of play ID to play data. Supports inserting plays
/// and resolving them by ID through the [`PlayRepository`] trait.
#[derive(Debug, Clone, Default)]
pub struct PlayStore {
    /// Map of play ID to play
    plays: HashMap<PlayId, Play>,
}

impl PlayStore {
    /// Create a new empty play store
    pub fn new() -> Self {
        PlayStore {
            plays: HashMap::new(),
        }
    }

    /// Build a play store from raw catalog entries
    ///
    /// Each entry is an `(id, name, raw type string)` triple. Type strings
    /// are validated against the closed play type enumeration, so an invalid
    /// catalog fails here rather than mid-statement.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnknownPlayType`] for the first entry whose
    /// type string is not recognized.
    pub fn from_raw<'a, I>(entries: I) -> Result<Self, BillingError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut store = PlayStore::new();
        for (id, name, raw_type) in entries {
            store.insert(id, Play::from_raw(name, raw_type)?);
        }
        Ok(store)
    }

    /// Insert a play under the given ID
    ///
    /// If a play is already registered under the ID, it is replaced.
    pub fn insert(&mut self, play_id: impl Into<PlayId>, play: Play) {
        self.plays.insert(play_id.into(), play);
    }

    /// Get the number of plays in the store
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Check whether the store holds no plays
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl PlayRepository for PlayStore {
    fn resolve(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }
}

impl<K: Into<PlayId>> FromIterator<(K, Play)> for PlayStore {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        let mut store = PlayStore::new();
        for (play_id, play) in iter {
            store.insert(play_id, play);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayType;

    #[test]
    fn test_insert_and_resolve_play() {
        let mut store = PlayStore::new();
        store.insert("hamlet", Play::new("Hamlet", PlayType::Tragedy));

        let play = store.resolve("hamlet");
        assert!(play.is_some());
        let play = play.unwrap();
        assert_eq!(play.name, "Hamlet");
        assert_eq!(play.play_type, PlayType::Tragedy);
    }

    #[test]
    fn test_resolve_unknown_id_returns_none() {
        let store = PlayStore::new();
        assert!(store.resolve("macbeth").is_none());
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut store = PlayStore::new();
        store.insert("hamlet", Play::new("Hamlet", PlayType::Tragedy));
        store.insert("hamlet", Play::new("Hamlet, Prince of Denmark", PlayType::Tragedy));

        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve("hamlet").unwrap().name, "Hamlet, Prince of Denmark");
    }

    #[test]
    fn test_from_raw_valid_catalog() {
        let store = PlayStore::from_raw(vec![
            ("hamlet", "Hamlet", "tragedy"),
            ("as-like", "As You Like It", "comedy"),
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.resolve("as-like").unwrap().play_type,
            PlayType::Comedy
        );
    }

    #[test]
    fn test_from_raw_rejects_unknown_type() {
        let result = PlayStore::from_raw(vec![
            ("hamlet", "Hamlet", "tragedy"),
            ("henry-v", "Henry V", "history"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            BillingError::unknown_play_type("history")
        );
    }

    #[test]
    fn test_from_iterator() {
        let store: PlayStore = vec![
            ("hamlet", Play::new("Hamlet", PlayType::Tragedy)),
            ("othello", Play::new("Othello", PlayType::Tragedy)),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
