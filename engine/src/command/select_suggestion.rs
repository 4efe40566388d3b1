//! [`Command`] for picking a quick-search suggestion.

use std::convert::Infallible;

use tracing as log;

use crate::{domain::listing, Engine};

#[cfg(doc)]
use crate::domain::Listing;

use super::Command;

/// [`Command`] for picking a [`Listing`] from the current suggestion list.
///
/// Prefills the quick-search query with the picked [`Listing`]'s name and
/// dismisses the list. The partition is not filtered by the pick.
///
/// Indicates whether the ID was present in the suggestion list. A stale ID
/// is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct SelectSuggestion {
    /// ID of the suggested [`Listing`] being picked.
    pub id: listing::Id,
}

impl<S> Command<SelectSuggestion> for Engine<S> {
    type Ok = bool;
    type Err = Infallible;

    fn execute(
        &mut self,
        cmd: SelectSuggestion,
    ) -> Result<Self::Ok, Self::Err> {
        let SelectSuggestion { id } = cmd;

        let Some(listing) = self.suggestions.iter().find(|l| l.id == id)
        else {
            log::warn!("picked suggestion `{id}` is not suggested anymore");
            return Ok(false);
        };

        let name = listing.name.to_string();
        self.quick_query = name;
        self.suggestions.clear();

        Ok(true)
    }
}
