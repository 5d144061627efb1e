//! Notepad operations over an ordered note sequence.
//!
//! # Responsibility
//! - Own the session's notes and expose create/update/delete/status APIs.
//! - Turn argument words into validated text and positions.
//!
//! # Invariants
//! - Every failed operation leaves the note sequence untouched.
//! - Displayed positions always equal storage index + 1.
//! - `load` replaces the sequence only after the store fully succeeds.

use crate::model::note::{Note, Position};
use crate::repo::note_store::{NoteStore, StoreError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type NotepadResult<T> = Result<T, NotepadError>;

/// Reason an argument list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// Wrong number of argument words.
    WrongArity,
    /// Note text is missing or blank.
    MissingText,
}

/// Error for notepad operations.
#[derive(Debug)]
pub enum NotepadError {
    /// Arguments do not fit the command.
    InvalidArgument(ArgumentError),
    /// Position word is not an integer.
    NotANumber(String),
    /// Position is outside `[1, count]`.
    InvalidPosition { position: i64, count: usize },
    /// Notepad file could not be read or written.
    Io(StoreError),
    /// Notepad file is malformed.
    Decode(StoreError),
}

impl NotepadError {
    /// Stable kind label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotANumber(_) => "not_a_number",
            Self::InvalidPosition { .. } => "invalid_position",
            Self::Io(_) => "io",
            Self::Decode(_) => "decode",
        }
    }
}

impl Display for NotepadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(ArgumentError::WrongArity) => write!(f, "invalid argument"),
            Self::InvalidArgument(ArgumentError::MissingText) => {
                write!(f, "missing note argument")
            }
            Self::NotANumber(value) => write!(f, "position `{value}` is not a number"),
            Self::InvalidPosition { position, count } => write!(
                f,
                "invalid position {position} (notepad has {count} notes)"
            ),
            Self::Io(err) | Self::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotepadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) | Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for NotepadError {
    fn from(value: StoreError) -> Self {
        if value.is_decode() {
            Self::Decode(value)
        } else {
            Self::Io(value)
        }
    }
}

/// Result of a done/undone request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Flag was flipped.
    Changed,
    /// Flag already had the requested value.
    Unchanged,
}

/// Ordered, unbounded note collection for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notepad {
    notes: Vec<Note>,
}

impl Notepad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already validated note sequence.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a note built from `words` joined by single spaces.
    pub fn create(&mut self, words: &[&str]) -> NotepadResult<Position> {
        let note = note_from_words(words)?;
        self.notes.push(note);
        let position = Position::from_index(self.notes.len() - 1);
        debug!(
            "event=note_create module=service status=ok position={} count={}",
            position,
            self.notes.len()
        );
        Ok(position)
    }

    /// Sets the done flag of the note at the single position argument.
    pub fn set_status(&mut self, words: &[&str], done: bool) -> NotepadResult<StatusChange> {
        let [word] = words else {
            return Err(NotepadError::InvalidArgument(ArgumentError::WrongArity));
        };
        let position = self.resolve_position(word)?;
        let note = &mut self.notes[position.index()];
        if note.done == done {
            return Ok(StatusChange::Unchanged);
        }
        note.done = done;
        debug!(
            "event=note_status module=service status=ok position={} done={}",
            position, done
        );
        Ok(StatusChange::Changed)
    }

    /// Replaces the text of the note at `words[0]` with the remaining words.
    pub fn update(&mut self, words: &[&str]) -> NotepadResult<Position> {
        let [word, text @ ..] = words else {
            return Err(NotepadError::InvalidArgument(ArgumentError::WrongArity));
        };
        if text.is_empty() {
            return Err(NotepadError::InvalidArgument(ArgumentError::WrongArity));
        }
        let position = self.resolve_position(word)?;
        let replacement = note_from_words(text)?;
        self.notes[position.index()].text = replacement.text;
        debug!(
            "event=note_update module=service status=ok position={}",
            position
        );
        Ok(position)
    }

    /// Removes the note at the single position argument, closing the gap.
    pub fn delete(&mut self, words: &[&str]) -> NotepadResult<Note> {
        let [word] = words else {
            return Err(NotepadError::InvalidArgument(ArgumentError::WrongArity));
        };
        let position = self.resolve_position(word)?;
        let removed = self.notes.remove(position.index());
        debug!(
            "event=note_delete module=service status=ok position={} count={}",
            position,
            self.notes.len()
        );
        Ok(removed)
    }

    /// Returns every note with its display position.
    pub fn list(&self, words: &[&str]) -> NotepadResult<Vec<(Position, &Note)>> {
        expect_no_args(words)?;
        Ok(self
            .notes
            .iter()
            .enumerate()
            .map(|(index, note)| (Position::from_index(index), note))
            .collect())
    }

    /// Removes all notes and returns how many were dropped.
    pub fn clear(&mut self, words: &[&str]) -> NotepadResult<usize> {
        expect_no_args(words)?;
        let removed = self.notes.len();
        self.notes.clear();
        debug!(
            "event=notepad_clear module=service status=ok removed={}",
            removed
        );
        Ok(removed)
    }

    /// Writes every note to the single path argument.
    pub fn save(&self, words: &[&str], store: &impl NoteStore) -> NotepadResult<PathBuf> {
        let path = single_path(words)?;
        store.save(path, &self.notes)?;
        Ok(path.to_path_buf())
    }

    /// Replaces all notes with the contents of the single path argument.
    pub fn load(&mut self, words: &[&str], store: &impl NoteStore) -> NotepadResult<usize> {
        let path = single_path(words)?;
        self.load_from(path, store)
    }

    /// Replaces all notes with the contents of `path`.
    pub fn load_from(&mut self, path: &Path, store: &impl NoteStore) -> NotepadResult<usize> {
        self.notes = store.load(path)?;
        Ok(self.notes.len())
    }

    fn resolve_position(&self, word: &str) -> NotepadResult<Position> {
        let value: i64 = word
            .parse()
            .map_err(|_| NotepadError::NotANumber(word.to_string()))?;
        let count = self.notes.len();
        usize::try_from(value)
            .ok()
            .and_then(Position::new)
            .filter(|position| position.get() <= count)
            .ok_or(NotepadError::InvalidPosition {
                position: value,
                count,
            })
    }
}

/// Rejects any argument words.
pub fn expect_no_args(words: &[&str]) -> NotepadResult<()> {
    if words.is_empty() {
        Ok(())
    } else {
        Err(NotepadError::InvalidArgument(ArgumentError::WrongArity))
    }
}

/// Formats one `list` line: `position: text`, with a done suffix.
pub fn format_note_line(position: Position, note: &Note) -> String {
    if note.done {
        format!("{position}: {} / Status: Done", note.text)
    } else {
        format!("{position}: {}", note.text)
    }
}

fn note_from_words(words: &[&str]) -> NotepadResult<Note> {
    Note::new(words.join(" ")).map_err(|_| NotepadError::InvalidArgument(ArgumentError::MissingText))
}

fn single_path<'a>(words: &[&'a str]) -> NotepadResult<&'a Path> {
    match words {
        [path] => Ok(Path::new(*path)),
        _ => Err(NotepadError::InvalidArgument(ArgumentError::WrongArity)),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_note_line, Notepad, NotepadError};
    use crate::model::note::{Note, Position};

    #[test]
    fn resolve_position_distinguishes_parse_and_range_errors() {
        let mut notepad = Notepad::new();
        notepad.create(&["one"]).unwrap();

        assert!(matches!(
            notepad.resolve_position("x1"),
            Err(NotepadError::NotANumber(value)) if value == "x1"
        ));
        assert!(matches!(
            notepad.resolve_position("0"),
            Err(NotepadError::InvalidPosition { position: 0, count: 1 })
        ));
        assert!(matches!(
            notepad.resolve_position("-4"),
            Err(NotepadError::InvalidPosition { position: -4, .. })
        ));
        assert_eq!(notepad.resolve_position("+1").unwrap().get(), 1);
    }

    #[test]
    fn format_note_line_appends_done_suffix() {
        let mut note = Note::new("buy milk").unwrap();
        let position = Position::from_index(0);
        assert_eq!(format_note_line(position, &note), "1: buy milk");

        note.done = true;
        assert_eq!(format_note_line(position, &note), "1: buy milk / Status: Done");
    }
}
