//! Favorites-related read definitions.

use derive_more::Deref;

#[cfg(doc)]
use crate::domain::Listing;

/// Indicator whether a [`Listing`] is favorited or not.
///
/// Consumed by the presentation for labeling the favorite button of every
/// [`Listing`] card.
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq)]
pub struct IsFavorite(pub bool);

impl PartialEq<bool> for IsFavorite {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}
