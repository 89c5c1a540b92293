//! Core types and traits for question-bot
//!
//! This crate provides the question record store, the console message
//! emitter and the configuration and logging plumbing shared by the CLI.

pub mod config;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod record;

pub use emitter::{Console, EmitterState, MessageEmitter, MessageListener, EXIT_COMMAND};
pub use error::{Error, Result};
pub use record::{InMemoryStore, Record, RecordId, RecordStore, UpdateError};
