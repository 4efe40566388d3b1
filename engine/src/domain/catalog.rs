//! [`Catalog`] definitions.

use crate::domain::{listing, Listing};

/// Read-only collection of [`Listing`]s supplied by the external data
/// source, loaded once at startup.
///
/// Source order is preserved. Identifier uniqueness is guaranteed by the
/// data source.
#[derive(Clone, Debug, Default)]
pub struct Catalog(Vec<Listing>);

impl Catalog {
    /// Creates a new [`Catalog`] from the provided [`Listing`]s,
    /// preserving their order.
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self(listings)
    }

    /// Parses a [`Catalog`] from its JSON array form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid JSON array of
    /// [`Listing`]s.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input).map(Self)
    }

    /// Returns all the [`Listing`]s of this [`Catalog`] in source order.
    #[must_use]
    pub fn all(&self) -> &[Listing] {
        &self.0
    }

    /// Looks up a [`Listing`] by its ID.
    ///
    /// [`None`] is returned for an unknown ID, which the presentation
    /// surfaces as a "not found" state. The catalog is static, so a retry
    /// cannot help.
    #[must_use]
    pub fn get(&self, id: listing::Id) -> Option<&Listing> {
        self.0.iter().find(|l| l.id == id)
    }

    /// Returns the number of [`Listing`]s in this [`Catalog`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Catalog`] contains no [`Listing`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
