//! [`Command`] for starting a drag-and-drop transfer.

use tracerr::Traced;

use crate::{domain::Listing, read::transfer::Payload, Engine};

use super::Command;

/// [`Command`] for encoding the given [`Listing`] as a drag-and-drop
/// [`Payload`].
///
/// No engine state changes: the transfer only completes when the
/// [`Payload`] is dropped onto a target.
#[derive(Clone, Debug)]
pub struct BeginTransfer {
    /// [`Listing`] snapshot being dragged.
    pub listing: Listing,
}

impl<S> Command<BeginTransfer> for Engine<S> {
    type Ok = Payload;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: BeginTransfer) -> Result<Self::Ok, Self::Err> {
        let BeginTransfer { listing } = cmd;

        Payload::encode(&listing).map_err(|e| tracerr::new!(e))
    }
}

/// Error of [`BeginTransfer`] [`Command`] execution.
pub type ExecutionError = serde_json::Error;
