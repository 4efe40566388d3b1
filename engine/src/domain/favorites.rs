//! [`FavoriteSet`] definitions.

use std::collections::HashSet;

use crate::domain::{listing, Listing};

/// User's curated shortlist of [`Listing`] snapshots, deduplicated by ID.
///
/// Presentation order is insertion order; a reload re-derives the order
/// from the persisted array.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FavoriteSet {
    /// Favorited [`Listing`] snapshots, in presentation order.
    items: Vec<Listing>,

    /// Index of the favorited IDs for `O(1)` membership tests.
    ids: HashSet<listing::Id>,
}

impl FavoriteSet {
    /// Checks whether the [`Listing`] with the given ID is favorited.
    #[must_use]
    pub fn contains(&self, id: listing::Id) -> bool {
        self.ids.contains(&id)
    }

    /// Inserts the given [`Listing`] snapshot into this [`FavoriteSet`].
    ///
    /// Idempotent: an already favorited [`Listing`] is left as is.
    /// Indicates whether the set has changed.
    pub fn insert(&mut self, listing: Listing) -> bool {
        if !self.ids.insert(listing.id) {
            return false;
        }
        self.items.push(listing);
        true
    }

    /// Removes the [`Listing`] with the given ID from this
    /// [`FavoriteSet`].
    ///
    /// Idempotent: an absent ID is a no-op. Indicates whether the set has
    /// changed.
    pub fn remove(&mut self, id: listing::Id) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.items.retain(|l| l.id != id);
        true
    }

    /// Toggles the given [`Listing`] snapshot in this [`FavoriteSet`]:
    /// removes it if favorited already, inserts it otherwise.
    ///
    /// Indicates whether the [`Listing`] is favorited afterwards.
    pub fn toggle(&mut self, listing: Listing) -> bool {
        if self.remove(listing.id) {
            return false;
        }
        _ = self.insert(listing);
        true
    }

    /// Empties this [`FavoriteSet`].
    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    /// Returns the favorited [`Listing`]s in presentation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Listing] {
        &self.items
    }

    /// Returns the number of favorited [`Listing`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether this [`FavoriteSet`] is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serializes this [`FavoriteSet`] as the JSON array of its
    /// [`Listing`]s in presentation order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Deserializes a [`FavoriteSet`] from its JSON array form,
    /// deduplicating by ID (first occurrence wins).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid JSON array of
    /// [`Listing`]s.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<Listing> = serde_json::from_str(input)?;
        let mut set = Self::default();
        for listing in items {
            _ = set.insert(listing);
        }
        Ok(set)
    }
}
