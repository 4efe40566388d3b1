//! Read entities definitions.

pub mod favorite;
pub mod listing;
pub mod transfer;

pub use self::favorite::IsFavorite;
