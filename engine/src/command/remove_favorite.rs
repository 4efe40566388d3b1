//! [`Command`] for unfavoriting a [`Listing`].

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::listing,
    infra::{storage, Snapshot, Storage},
    Engine,
};

#[cfg(doc)]
use crate::domain::Listing;

use super::Command;

/// [`Command`] for removing the [`Listing`] with the given ID from the
/// favorites set.
///
/// Idempotent: removing an absent ID changes nothing and skips persisting.
/// Indicates whether the set has changed.
#[derive(Clone, Copy, Debug)]
pub struct RemoveFavorite {
    /// ID of the [`Listing`] being unfavorited.
    pub id: listing::Id,
}

impl<S> Command<RemoveFavorite> for Engine<S>
where
    S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: RemoveFavorite) -> Result<Self::Ok, Self::Err> {
        let RemoveFavorite { id } = cmd;

        let changed = self.favorites.remove(id);
        if changed {
            self.persist()?;
        }

        Ok(changed)
    }
}

/// Error of [`RemoveFavorite`] [`Command`] execution.
pub type ExecutionError = storage::Error;
