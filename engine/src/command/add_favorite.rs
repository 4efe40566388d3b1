//! [`Command`] for favoriting a [`Listing`].

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::Listing,
    infra::{storage, Snapshot, Storage},
    Engine,
};

use super::Command;

/// [`Command`] for inserting the given [`Listing`] into the favorites set.
///
/// Idempotent: favoriting an already favorited [`Listing`] changes nothing
/// and skips persisting. Indicates whether the set has changed.
#[derive(Clone, Debug)]
pub struct AddFavorite {
    /// [`Listing`] snapshot being favorited.
    pub listing: Listing,
}

impl<S> Command<AddFavorite> for Engine<S>
where
    S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: AddFavorite) -> Result<Self::Ok, Self::Err> {
        let AddFavorite { listing } = cmd;

        let changed = self.favorites.insert(listing);
        if changed {
            self.persist()?;
        }

        Ok(changed)
    }
}

/// Error of [`AddFavorite`] [`Command`] execution.
pub type ExecutionError = storage::Error;
