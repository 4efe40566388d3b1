//! [`Storage`] definitions.

mod file;
mod memory;

use derive_more::{Display, Error as StdError, From};

use crate::domain::FavoriteSet;

pub use self::{file::FileStore, memory::InMemory};

/// [`Storage`] of the [`Engine`]'s favorites.
///
/// [`Engine`]: crate::Engine
pub use common::Handler as Storage;

/// Persisted form of a [`FavoriteSet`]: the JSON array of its [`Listing`]s
/// in presentation order.
///
/// [`Listing`]: crate::domain::Listing
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub struct Snapshot(String);

impl Snapshot {
    /// Encodes the given [`FavoriteSet`] as a [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(favorites: &FavoriteSet) -> Result<Self, serde_json::Error> {
        favorites.to_json().map(Self)
    }

    /// Decodes the [`FavoriteSet`] out of this [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns an error if this [`Snapshot`] doesn't carry a valid
    /// [`FavoriteSet`].
    pub fn decode(&self) -> Result<FavoriteSet, serde_json::Error> {
        FavoriteSet::from_json(&self.0)
    }

    /// Returns the raw text of this [`Snapshot`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error of a [`Storage`] operation.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read or write the persisted [`Snapshot`].
    #[display("I/O operation failed: {_0}")]
    Io(std::io::Error),

    /// Persisted [`Snapshot`] cannot be encoded or decoded.
    #[display("JSON (de)serialization failed: {_0}")]
    Json(serde_json::Error),
}
