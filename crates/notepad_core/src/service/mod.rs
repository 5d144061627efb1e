//! Notepad use-case services.
//!
//! # Responsibility
//! - Validate raw command arguments and apply them to the note sequence.
//! - Delegate persistence to `NoteStore` implementations.

pub mod notepad;
