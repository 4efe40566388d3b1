//! Engine contains the search and favorites logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod read;

use common::operations::{Load, Save};
use tracerr::Traced;
use tracing as log;

use self::{
    domain::{listing, Catalog, FavoriteSet, Listing},
    infra::{storage, Snapshot, Storage},
    read::IsFavorite,
};

pub use self::command::Command;

/// Search and favorites engine over a static [`Catalog`] of [`Listing`]s.
///
/// Holds the current search partition, the quick-search state and the
/// favorites set, mutated via [`Command`]s and observed via accessors.
#[derive(Clone, Debug)]
pub struct Engine<S> {
    /// Full [`Catalog`] this [`Engine`] searches over.
    catalog: Catalog,

    /// Current search partition: the subset of the [`Catalog`] produced by
    /// the last partitioning [`Command`].
    partition: Vec<Listing>,

    /// Current quick-search query text, as typed.
    quick_query: String,

    /// Quick-search suggestions for the current query, drawn from the
    /// current partition.
    suggestions: Vec<Listing>,

    /// Favorited [`Listing`] snapshots.
    favorites: FavoriteSet,

    /// [`Storage`] persisting the [`favorites`](Engine::favorites).
    storage: S,
}

impl<S> Engine<S> {
    /// Creates a new [`Engine`] over the given [`Catalog`], restoring the
    /// favorites set from the given [`Storage`].
    ///
    /// Any failure of the restore degrades to an empty favorites set: a
    /// lost shortlist is preferable to an unusable search.
    pub fn new(catalog: Catalog, mut storage: S) -> Self
    where
        S: Storage<Load, Ok = Option<Snapshot>, Err = Traced<storage::Error>>,
    {
        let favorites = match storage.execute(Load) {
            Ok(Some(snapshot)) => snapshot.decode().unwrap_or_else(|e| {
                log::warn!("persisted favorites are malformed: {e}");
                FavoriteSet::default()
            }),
            Ok(None) => FavoriteSet::default(),
            Err(e) => {
                log::warn!("cannot load persisted favorites: {e}");
                FavoriteSet::default()
            }
        };

        Self {
            partition: catalog.all().to_vec(),
            catalog,
            quick_query: String::new(),
            suggestions: Vec::new(),
            favorites,
            storage,
        }
    }

    /// Returns the full [`Catalog`] of this [`Engine`].
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the [`Storage`] of this [`Engine`].
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the current search results, in catalog order.
    #[must_use]
    pub fn results(&self) -> &[Listing] {
        &self.partition
    }

    /// Returns the current quick-search query text.
    #[must_use]
    pub fn quick_query(&self) -> &str {
        &self.quick_query
    }

    /// Returns the current quick-search suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[Listing] {
        &self.suggestions
    }

    /// Returns the favorited [`Listing`]s, in presentation order.
    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Indicates whether the [`Listing`] with the given ID is favorited.
    #[must_use]
    pub fn is_favorite(&self, id: listing::Id) -> IsFavorite {
        IsFavorite(self.favorites.contains(id))
    }

    /// Looks up a [`Listing`] in the [`Catalog`] by its ID.
    #[must_use]
    pub fn lookup(&self, id: listing::Id) -> Option<&Listing> {
        self.catalog.get(id)
    }

    /// Persists the current favorites set into the [`Storage`].
    fn persist(&mut self) -> Result<(), Traced<storage::Error>>
    where
        S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
    {
        let snapshot = Snapshot::encode(&self.favorites)
            .map_err(|e| tracerr::new!(storage::Error::Json(e)))?;
        self.storage
            .execute(Save(snapshot))
            .map_err(tracerr::wrap!())
    }
}
