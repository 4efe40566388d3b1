//! Infrastructure implementations.

pub mod storage;

pub use self::storage::{FileStore, InMemory, Snapshot, Storage};
