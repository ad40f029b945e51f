#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod memory;
pub mod snapshot;

pub use memory::Storage;
pub use snapshot::{SnapshotError, from_json, to_json};
