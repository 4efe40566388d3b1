//! [`Command`] for toggling a favorited [`Listing`].

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::Listing,
    infra::{storage, Snapshot, Storage},
    Engine,
};

use super::Command;

/// [`Command`] for toggling the given [`Listing`] in the favorites set:
/// removing it if favorited already, inserting it otherwise.
///
/// The new state of the set is persisted before returning.
///
/// Indicates whether the [`Listing`] is favorited afterwards.
#[derive(Clone, Debug)]
pub struct ToggleFavorite {
    /// [`Listing`] snapshot being toggled.
    pub listing: Listing,
}

impl<S> Command<ToggleFavorite> for Engine<S>
where
    S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: ToggleFavorite) -> Result<Self::Ok, Self::Err> {
        let ToggleFavorite { listing } = cmd;

        let now_favorite = self.favorites.toggle(listing);
        self.persist()?;

        Ok(now_favorite)
    }
}

/// Error of [`ToggleFavorite`] [`Command`] execution.
pub type ExecutionError = storage::Error;
