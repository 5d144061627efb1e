//! Domain model for notepad entries.
//!
//! # Responsibility
//! - Define the note record and the user-facing position type.
//! - Keep the persisted wire shape next to the type it describes.
//!
//! # Invariants
//! - Note text is never blank, including after deserialization.
//! - Positions are 1-based; index conversion happens only through `Position`.

pub mod note;
