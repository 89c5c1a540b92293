//! Console read loop and listener fan-out
//!
//! The [`MessageEmitter`] reads lines from a [`Console`] and hands each one
//! to every registered [`MessageListener`], writing back any replies.

pub mod console;
pub mod listener;
pub mod runner;

pub use console::Console;
pub use listener::MessageListener;
pub use runner::{EmitterState, MessageEmitter, EXIT_COMMAND};
