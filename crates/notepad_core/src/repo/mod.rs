//! Persistence boundary for notepad files.
//!
//! # Responsibility
//! - Define the store contract used by notepad save/load.
//! - Keep file system and JSON details out of the service layer.
//!
//! # Invariants
//! - A failed save never leaves a partially written target file.
//! - A failed load returns an error and no notes.

pub mod json_store;
pub mod note_store;
