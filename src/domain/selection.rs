//! The shortlist of listings a user is comparing.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use super::property::Property;
use crate::infra::storage::KeyValueStore;

/// Upper bound on simultaneously compared listings.
pub const MAX_COMPARE: usize = 3;

/// Storage slot holding the serialized shortlist.
pub const STORAGE_KEY: &str = "piol_compare_properties";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddRejection {
    #[error("comparison is limited to three properties")]
    CapacityReached,
    #[error("property is already in the comparison")]
    AlreadySelected,
}

/// Bounded, ordered, duplicate-free set of listings, mirrored to storage
/// after every mutation. The in-memory list stays authoritative when the
/// storage slot misbehaves.
#[derive(Debug)]
pub struct SelectionSetStore<S> {
    storage: S,
    properties: Vec<Property>,
}

impl<S: KeyValueStore> SelectionSetStore<S> {
    /// Rehydrates from `storage`. Missing or unreadable data yields an empty set.
    pub fn load(storage: S) -> Self {
        let properties = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Property>>(&raw) {
                Ok(stored) => sanitize(stored),
                Err(err) => {
                    warn!(error = %err, "discarding unreadable comparison set");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read comparison set");
                Vec::new()
            }
        };
        debug!(count = properties.len(), "comparison set loaded");
        Self {
            storage,
            properties,
        }
    }

    /// Appends `property` unless the set is full or already holds its id.
    pub fn try_add(&mut self, property: Property) -> Result<(), AddRejection> {
        if self.properties.len() >= MAX_COMPARE {
            return Err(AddRejection::CapacityReached);
        }
        if self.contains(&property.id) {
            return Err(AddRejection::AlreadySelected);
        }
        self.properties.push(property);
        self.persist();
        Ok(())
    }

    pub fn add(&mut self, property: Property) -> bool {
        self.try_add(property).is_ok()
    }

    /// Swaps in a newer snapshot of an already selected listing, keeping its slot.
    pub fn replace(&mut self, property: Property) -> bool {
        let Some(slot) = self
            .properties
            .iter_mut()
            .find(|selected| selected.id == property.id)
        else {
            return false;
        };
        *slot = property;
        self.persist();
        true
    }

    pub fn remove(&mut self, property_id: &str) {
        self.properties.retain(|property| property.id != property_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.properties.clear();
        self.persist();
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.properties
            .iter()
            .any(|property| property.id == property_id)
    }

    pub fn can_add_more(&self) -> bool {
        self.properties.len() < MAX_COMPARE
    }

    /// Selected listings in insertion order.
    pub fn current(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.properties) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to encode comparison set");
                return;
            }
        };
        if let Err(err) = self.storage.set(STORAGE_KEY, &json) {
            warn!(error = %err, "failed to persist comparison set");
        }
    }
}

/// Drops repeated ids (first wins) and anything past the capacity.
fn sanitize(stored: Vec<Property>) -> Vec<Property> {
    let stored_len = stored.len();
    let mut seen = HashSet::new();
    let properties: Vec<Property> = stored
        .into_iter()
        .filter(|property| seen.insert(property.id.clone()))
        .take(MAX_COMPARE)
        .collect();
    if properties.len() != stored_len {
        warn!(
            stored = stored_len,
            kept = properties.len(),
            "stored comparison set violated its bounds; trimmed"
        );
    }
    properties
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::property::fixtures::listing;
    use crate::infra::storage::{MemoryStore, StorageError};

    fn ids<S: KeyValueStore>(store: &SelectionSetStore<S>) -> Vec<String> {
        store.current().iter().map(|p| p.id.clone()).collect()
    }

    /// Slot that fails every access.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn starts_empty() {
        let store = SelectionSetStore::load(MemoryStore::new());
        assert!(store.is_empty());
        assert!(store.can_add_more());
        assert!(store.current().is_empty());
    }

    #[test]
    fn never_holds_more_than_three() {
        let mut store = SelectionSetStore::load(MemoryStore::new());
        for n in 0..6 {
            let added = store.add(listing(&format!("p{n}"), 1000.0, 1, 1, 10.0));
            assert_eq!(added, n < MAX_COMPARE);
            assert!(store.len() <= MAX_COMPARE);
        }
        assert_eq!(ids(&store), vec!["p0", "p1", "p2"]);
        assert!(!store.can_add_more());
        assert_eq!(
            store.try_add(listing("p9", 1.0, 0, 0, 0.0)),
            Err(AddRejection::CapacityReached)
        );
        assert_eq!(ids(&store), vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut store = SelectionSetStore::load(MemoryStore::new());
        assert!(store.add(listing("a", 1.0, 0, 0, 0.0)));
        assert!(!store.add(listing("a", 2.0, 0, 0, 0.0)));
        assert_eq!(
            store.try_add(listing("a", 3.0, 0, 0, 0.0)),
            Err(AddRejection::AlreadySelected)
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.current()[0].price, 1.0);
    }

    #[test]
    fn capacity_is_reported_before_duplication() {
        let mut store = SelectionSetStore::load(MemoryStore::new());
        for id in ["a", "b", "c"] {
            store.add(listing(id, 1.0, 0, 0, 0.0));
        }
        assert_eq!(
            store.try_add(listing("a", 1.0, 0, 0, 0.0)),
            Err(AddRejection::CapacityReached)
        );
    }

    #[test]
    fn contains_tracks_add_and_remove() {
        let mut store = SelectionSetStore::load(MemoryStore::new());
        store.add(listing("a", 1.0, 0, 0, 0.0));
        store.add(listing("b", 1.0, 0, 0, 0.0));
        assert!(store.contains("a"));

        store.remove("a");
        assert!(!store.contains("a"));
        assert_eq!(ids(&store), vec!["b"]);

        store.remove("missing");
        assert_eq!(ids(&store), vec!["b"]);
    }

    #[test]
    fn clear_empties_and_reopens_capacity() {
        let mut store = SelectionSetStore::load(MemoryStore::new());
        for id in ["a", "b", "c"] {
            store.add(listing(id, 1.0, 0, 0, 0.0));
        }
        store.clear();
        assert!(store.current().is_empty());
        assert!(store.can_add_more());
    }

    #[test]
    fn reload_restores_same_ids_in_order() {
        let storage = MemoryStore::new();
        let mut store = SelectionSetStore::load(storage.clone());
        store.add(listing("c", 300.0, 3, 2, 80.0));
        store.add(listing("a", 100.0, 1, 1, 30.0));
        store.add(listing("b", 200.0, 2, 1, 50.0));
        store.remove("a");

        let reloaded = SelectionSetStore::load(storage);
        assert_eq!(ids(&reloaded), vec!["c", "b"]);
        assert_eq!(reloaded.current(), store.current());
    }

    #[test]
    fn replace_refreshes_snapshot_in_place() {
        let storage = MemoryStore::new();
        let mut store = SelectionSetStore::load(storage.clone());
        store.add(listing("a", 100.0, 1, 1, 10.0));
        store.add(listing("b", 200.0, 1, 1, 10.0));

        assert!(store.replace(listing("a", 150.0, 1, 1, 10.0)));
        assert!(!store.replace(listing("z", 1.0, 0, 0, 0.0)));
        assert_eq!(ids(&store), vec!["a", "b"]);

        let reloaded = SelectionSetStore::load(storage);
        assert_eq!(reloaded.current()[0].price, 150.0);
    }

    #[test]
    fn clear_is_persisted() {
        let storage = MemoryStore::new();
        let mut store = SelectionSetStore::load(storage.clone());
        store.add(listing("a", 1.0, 0, 0, 0.0));
        store.clear();
        assert!(SelectionSetStore::load(storage).is_empty());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let mut storage = MemoryStore::new();
        storage.set(STORAGE_KEY, "{not json").unwrap();
        let store = SelectionSetStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn oversized_slot_is_trimmed() {
        let stored: Vec<Property> = ["a", "b", "a", "c", "d"]
            .iter()
            .map(|id| listing(id, 1.0, 0, 0, 0.0))
            .collect();
        let mut storage = MemoryStore::new();
        storage
            .set(STORAGE_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let store = SelectionSetStore::load(storage);
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn storage_failures_do_not_affect_memory_state() {
        let mut store = SelectionSetStore::load(BrokenStore);
        assert!(store.add(listing("a", 1.0, 0, 0, 0.0)));
        assert!(store.contains("a"));
        store.remove("a");
        assert!(store.is_empty());
    }
}
