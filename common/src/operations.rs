//! Abstract operations.

/// Operation to load a value.
#[derive(Clone, Copy, Debug)]
pub struct Load;

/// Operation to save a value.
#[derive(Clone, Copy, Debug)]
pub struct Save<T>(pub T);
