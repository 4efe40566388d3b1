//! [`Command`] for dropping a transfer onto the favorites area.

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

use super::{AddFavorite, Command};

/// [`Command`] for decoding a dropped [`Payload`] and favoriting the
/// carried [`Listing`].
///
/// A malformed [`Payload`] is a no-op: drag data crosses an untrusted
/// transport, so garbage is expected rather than exceptional. Indicates
/// whether the favorites set has changed.
#[derive(Clone, Debug)]
pub struct CompleteAddTransfer {
    /// Dropped [`Payload`].
    pub payload: Payload,
}

impl<S> Command<CompleteAddTransfer> for Engine<S>
where
    S: Storage<Save<Snapshot>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        cmd: CompleteAddTransfer,
    ) -> Result<Self::Ok, Self::Err> {
        let CompleteAddTransfer { payload } = cmd;

        let listing = match payload.decode() {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("ignoring malformed drag payload: {e}");
                return Ok(false);
            }
        };

        self.execute(AddFavorite { listing })
    }
}

/// Error of [`CompleteAddTransfer`] [`Command`] execution.
pub type ExecutionError = storage::Error;
