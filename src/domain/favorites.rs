//! Client-side mirror of the user's favorite listings.

use std::collections::HashSet;

use super::property::{Property, PropertyId};

/// Ids the backend reports as favorites, kept in sync with toggle responses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoriteIds {
    ids: HashSet<PropertyId>,
}

impl FavoriteIds {
    pub fn from_properties(properties: &[Property]) -> Self {
        Self {
            ids: properties.iter().map(|property| property.id.clone()).collect(),
        }
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.ids.contains(property_id)
    }

    /// Records the state the backend answered with after a toggle.
    pub fn set(&mut self, property_id: &str, favorite: bool) {
        if favorite {
            self.ids.insert(property_id.to_string());
        } else {
            self.ids.remove(property_id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::fixtures::listing;

    #[test]
    fn seeded_from_listings() {
        let favorites = FavoriteIds::from_properties(&[
            listing("a", 1.0, 0, 0, 0.0),
            listing("b", 1.0, 0, 0, 0.0),
            listing("a", 2.0, 0, 0, 0.0),
        ]);
        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains("a"));
        assert!(!favorites.contains("c"));
    }

    #[test]
    fn toggle_answers_are_applied() {
        let mut favorites = FavoriteIds::default();
        assert!(favorites.is_empty());

        favorites.set("a", true);
        favorites.set("a", true);
        assert_eq!(favorites.len(), 1);

        favorites.set("a", false);
        favorites.set("missing", false);
        assert!(favorites.is_empty());
    }
}
