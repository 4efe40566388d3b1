//! [`Command`] for applying an advanced-search [`Filter`].

use std::convert::Infallible;

use tracing as log;

use crate::{read::listing::Filter, Engine};

use super::Command;

/// [`Command`] for replacing the search partition with the subset of the
/// **full catalog** satisfying the given [`Filter`].
///
/// Always starts from the full catalog, so consecutive submissions never
/// narrow each other. The quick-search query and suggestions are left
/// untouched.
#[derive(Clone, Debug)]
pub struct ApplyFilter {
    /// Criteria of this search submission.
    pub filter: Filter,
}

impl<S> Command<ApplyFilter> for Engine<S> {
    type Ok = ();
    type Err = Infallible;

    fn execute(&mut self, cmd: ApplyFilter) -> Result<Self::Ok, Self::Err> {
        let ApplyFilter { filter } = cmd;

        self.partition = self
            .catalog
            .all()
            .iter()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect();

        log::debug!(
            "advanced search matched {} listing(s)",
            self.partition.len(),
        );
        Ok(())
    }
}
