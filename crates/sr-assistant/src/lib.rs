//! Showroom assistant: library crate for the dealership voice assistant.
//!
//! Re-exports all modules so the `showroom` binary and external crates
//! (e.g. `sr-api`, `sr-e2e-tests`) share the same dialogue core.

pub mod config;
pub mod conversation;
pub mod dialogue;
pub mod inference;
pub mod session;
pub mod speech;

pub use dialogue::DialogueController;
pub use session::CallSession;
