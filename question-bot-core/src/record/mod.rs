//! Question records and the store that owns them
//!
//! Every question asked through a listener becomes a [`Record`]. The
//! [`RecordStore`] assigns identifiers and stamps lifecycle timestamps;
//! callers only ever see clones.

pub mod store;
pub mod types;

pub use store::{InMemoryStore, RecordStore, UpdateError};
pub use types::{Record, RecordId};
