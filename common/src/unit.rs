//! Marker types.

/// Marker type describing an entity addition.
#[derive(Clone, Copy, Debug)]
pub struct Addition;
