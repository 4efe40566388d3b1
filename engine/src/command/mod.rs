//! [`Command`] definition.

pub mod add_favorite;
pub mod apply_filter;
pub mod begin_transfer;
pub mod clear_favorites;
pub mod complete_add_transfer;
pub mod complete_remove_transfer;
pub mod filter_by_kind;
pub mod remove_favorite;
pub mod select_suggestion;
pub mod set_quick_query;
pub mod toggle_favorite;

/// [`Command`] of the [`Engine`].
///
/// [`Engine`]: crate::Engine
pub use common::Handler as Command;

pub use self::{
    add_favorite::AddFavorite, apply_filter::ApplyFilter,
    begin_transfer::BeginTransfer, clear_favorites::ClearFavorites,
    complete_add_transfer::CompleteAddTransfer,
    complete_remove_transfer::CompleteRemoveTransfer,
    filter_by_kind::FilterByKind, remove_favorite::RemoveFavorite,
    select_suggestion::SelectSuggestion, set_quick_query::SetQuickQuery,
    toggle_favorite::ToggleFavorite,
};
