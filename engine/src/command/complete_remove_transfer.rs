//! [`Command`] for dropping a transfer outside the favorites area.

use common::operations::Save;
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{storage, Snapshot, Storage},
    read::transfer::Payload,
    Engine,
};

#[cfg(doc)]
use crate::domain::Listing;

use super::{Command, RemoveFavorite};

/// [`Command`] for decoding a dropped [`Payload`] and unfavoriting the
/// [`Listing`] it carries, by its ID.
///
/// A malformed [`Payload`] is a no-op, same as for
/// [`CompleteAddTransfer`]. Indicates whether the favorites set has
/// changed.
///
/// [`CompleteAddTransfer`]: super::CompleteAddTransfer
#[derive(Clone, Debug)]
pub struct CompleteRemoveTransfer {
    /// Dropped [`Payload`].
    pub payload: Payload,
}

impl<S> Command<CompleteRemoveTransfer> for Engine<S>
where
    S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        cmd: CompleteRemoveTransfer,
    ) -> Result<Self::Ok, Self::Err> {
        let CompleteRemoveTransfer { payload } = cmd;

        let listing = match payload.decode() {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("ignoring malformed drag payload: {e}");
                return Ok(false);
            }
        };

        self.execute(RemoveFavorite { id: listing.id })
    }
}

/// Error of [`CompleteRemoveTransfer`] [`Command`] execution.
pub type ExecutionError = storage::Error;
