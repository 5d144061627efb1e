//! Line-oriented command shell.
//!
//! # Responsibility
//! - Tokenize input lines into a verb and argument words.
//! - Drive a `Notepad` from a line source and report through a `Terminal`.
//!
//! # Invariants
//! - Blank lines produce no command and no output besides the next prompt.
//! - Command failures are reported and never end the session.
//! - The session never terminates the process; callers map `SessionEnd`.

pub mod command;
pub mod session;
