//! [`Command`] for emptying the favorites set.

use common::operations::Save;
use tracerr::Traced;

use crate::{
    infra::{storage, Snapshot, Storage},
    Engine,
};

#[cfg(doc)]
use crate::domain::Listing;

use super::Command;

/// [`Command`] for removing every [`Listing`] from the favorites set.
///
/// The emptied set is persisted before returning, even if it was empty
/// already.
#[derive(Clone, Copy, Debug)]
pub struct ClearFavorites;

impl<S> Command<ClearFavorites> for Engine<S>
where
    S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: ClearFavorites) -> Result<Self::Ok, Self::Err> {
        let ClearFavorites = cmd;

        self.favorites.clear();
        self.persist()?;

        Ok(())
    }
}

/// Error of [`ClearFavorites`] [`Command`] execution.
pub type ExecutionError = storage::Error;
