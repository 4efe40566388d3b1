//! [`FileStore`] definitions.

use std::{fs, io, path::PathBuf};

use common::operations::{Load, Save};
use tracerr::Traced;

use super::{Error, Snapshot, Storage};

/// [`Storage`] persisting the [`Snapshot`] in a single file.
///
/// The whole [`Snapshot`] is rewritten on every save, mirroring how a
/// browser's local storage replaces a keyed value.
#[derive(Clone, Debug)]
pub struct FileStore {
    /// Path of the file holding the [`Snapshot`].
    path: PathBuf,
}

impl FileStore {
    /// Creates a new [`FileStore`] persisting at the given `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage<Load> for FileStore {
    type Ok = Option<Snapshot>;
    type Err = Traced<Error>;

    fn execute(&mut self, _: Load) -> Result<Self::Ok, Self::Err> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(Snapshot::from(text))),
            // Nothing persisted yet.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(tracerr::new!(Error::Io(e))),
        }
    }
}

impl Storage<Save<Snapshot>> for FileStore {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        Save(snapshot): Save<Snapshot>,
    ) -> Result<Self::Ok, Self::Err> {
        fs::write(&self.path, snapshot.as_str())
            .map_err(|e| tracerr::new!(Error::Io(e)))
    }
}
