//! [`Command`] for updating the quick-search query.

use std::convert::Infallible;

use crate::{read::listing::QuickPattern, Engine};

#[cfg(doc)]
use crate::domain::Listing;

use super::Command;

/// [`Command`] for storing the quick-search query text and recomputing the
/// suggestion list.
///
/// Suggestions are drawn from the current partition only, by
/// case-insensitive substring match on a [`Listing`]'s postcode, location
/// or name. Empty text clears the suggestions; whitespace is matched
/// literally.
///
/// The partition itself is not touched: suggestions preview, they don't
/// commit a filter.
#[derive(Clone, Debug)]
pub struct SetQuickQuery {
    /// New query text, as typed.
    pub text: String,
}

impl<S> Command<SetQuickQuery> for Engine<S> {
    type Ok = ();
    type Err = Infallible;

    fn execute(&mut self, cmd: SetQuickQuery) -> Result<Self::Ok, Self::Err> {
        let SetQuickQuery { text } = cmd;

        match QuickPattern::new(&text) {
            Some(pattern) => {
                self.suggestions = self
                    .partition
                    .iter()
                    .filter(|l| pattern.matches_listing(l))
                    .cloned()
                    .collect();
            }
            None => self.suggestions.clear(),
        }
        self.quick_query = text;

        Ok(())
    }
}
