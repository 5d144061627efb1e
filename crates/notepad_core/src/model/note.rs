//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record stored in a notepad.
//! - Validate text on every construction path, serde included.
//!
//! # Invariants
//! - `text` is non-empty after trimming.
//! - `done` is serialized as `status` to match the notepad file format.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for note construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Text is empty or whitespace-only.
    EmptyText,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// One notepad entry with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteWire")]
pub struct Note {
    /// Single-line note body.
    pub text: String,
    /// Completion flag, `status` on the wire.
    #[serde(rename = "status")]
    pub done: bool,
}

impl Note {
    /// Creates a not-done note.
    ///
    /// # Errors
    /// - Returns `EmptyText` when `text` is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, NoteValidationError> {
        let note = Self {
            text: text.into(),
            done: false,
        };
        note.validate()?;
        Ok(note)
    }

    /// Checks the text invariant.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.text.trim().is_empty() {
            return Err(NoteValidationError::EmptyText);
        }
        Ok(())
    }
}

/// Raw persisted shape, validated into `Note` on decode.
#[derive(Deserialize)]
struct NoteWire {
    text: String,
    #[serde(default)]
    status: bool,
}

impl TryFrom<NoteWire> for Note {
    type Error = NoteValidationError;

    fn try_from(value: NoteWire) -> Result<Self, Self::Error> {
        let note = Self {
            text: value.text,
            done: value.status,
        };
        note.validate()?;
        Ok(note)
    }
}

/// 1-based note position as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Returns `None` for zero.
    pub fn new(value: usize) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Position of the element stored at a 0-based index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// 1-based value.
    pub fn get(self) -> usize {
        self.0
    }

    /// 0-based storage index.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
