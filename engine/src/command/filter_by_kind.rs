//! [`Command`] for partitioning the catalog by offer [`Kind`].

use std::convert::Infallible;

use tracing as log;

use crate::{domain::listing, Engine};

#[cfg(doc)]
use crate::domain::listing::Kind;

use super::Command;

/// [`Command`] for replacing the search partition with the subset of the
/// catalog having the selected [`Kind`].
///
/// Also resets the quick-search query and suggestions, so the previous
/// tab's quick search never leaks into the new partition.
#[derive(Clone, Copy, Debug)]
pub struct FilterByKind {
    /// [`Kind`] of offers to select.
    pub kind: listing::Kind,
}

impl<S> Command<FilterByKind> for Engine<S> {
    type Ok = ();
    type Err = Infallible;

    fn execute(&mut self, cmd: FilterByKind) -> Result<Self::Ok, Self::Err> {
        let FilterByKind { kind } = cmd;

        self.partition = self
            .catalog
            .all()
            .iter()
            .filter(|l| l.kind == kind)
            .cloned()
            .collect();
        self.quick_query.clear();
        self.suggestions.clear();

        log::debug!(
            "partitioned catalog by `{kind}` kind: {} listing(s)",
            self.partition.len(),
        );
        Ok(())
    }
}
