#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod memory;
pub mod wire;

pub use memory::{MemoryStorage, Snapshot, SnapshotError};
