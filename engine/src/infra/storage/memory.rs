//! [`InMemory`] definitions.

use common::operations::{Load, Save};
use tracerr::Traced;

use super::{Error, Snapshot, Storage};

/// [`Storage`] keeping the [`Snapshot`] in memory only.
///
/// Counts its writes, so tests can assert on persisting behavior.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// Last saved [`Snapshot`], if any.
    slot: Option<Snapshot>,

    /// Number of performed saves.
    writes: usize,
}

impl InMemory {
    /// Creates a new [`InMemory`] storage pre-filled with the given
    /// [`Snapshot`].
    #[must_use]
    pub fn seeded(snapshot: Snapshot) -> Self {
        Self {
            slot: Some(snapshot),
            writes: 0,
        }
    }

    /// Returns the last saved [`Snapshot`], if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.slot.as_ref()
    }

    /// Returns the number of performed saves.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage<Load> for InMemory {
    type Ok = Option<Snapshot>;
    type Err = Traced<Error>;

    fn execute(&mut self, _: Load) -> Result<Self::Ok, Self::Err> {
        Ok(self.slot.clone())
    }
}

impl Storage<Save<Snapshot>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        Save(snapshot): Save<Snapshot>,
    ) -> Result<Self::Ok, Self::Err> {
        self.slot = Some(snapshot);
        self.writes += 1;
        Ok(())
    }
}
