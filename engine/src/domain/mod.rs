//! Domain entities definitions.

pub mod catalog;
pub mod favorites;
pub mod listing;

pub use self::{
    catalog::Catalog, favorites::FavoriteSet, listing::Listing,
};
