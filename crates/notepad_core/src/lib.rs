//! Core logic for the interactive notepad.
//! This crate owns the note invariants, command loop and file format.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod shell;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::note::{Note, NoteValidationError, Position};
pub use repo::json_store::JsonFileStore;
pub use repo::note_store::{NoteStore, StoreError, StoreOp, StoreResult};
pub use service::notepad::{
    expect_no_args, format_note_line, ArgumentError, Notepad, NotepadError, NotepadResult,
    StatusChange,
};
pub use shell::command::{parse_line, tokenize, Command, UnknownCommand, Verb};
pub use shell::session::{Flow, Session, SessionEnd, Terminal};
