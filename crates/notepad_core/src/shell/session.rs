//! Interactive command loop.
//!
//! # Responsibility
//! - Read one line at a time, dispatch it to `Notepad`, and report the result.
//! - Keep terminal rendering behind the `Terminal` trait.
//!
//! # Invariants
//! - Each command finishes before the next line is read.
//! - `exit` ends the loop with `SessionEnd::Exit`; nothing else does except
//!   end of input or a terminal/input I/O failure.
//! - Logged events carry verbs, counts and error kinds, never note text.

use super::command::{parse_line, Command, Verb};
use crate::repo::note_store::NoteStore;
use crate::service::notepad::{
    expect_no_args, format_note_line, Notepad, NotepadResult, StatusChange,
};
use log::{debug, info, warn};
use std::io::{self, BufRead};

/// Output side of the shell.
pub trait Terminal {
    /// Asks for the next command.
    fn prompt(&mut self) -> io::Result<()>;
    /// Reports a successful command.
    fn ok(&mut self, message: &str) -> io::Result<()>;
    /// Reports neutral information.
    fn info(&mut self, message: &str) -> io::Result<()>;
    /// Reports a failed command.
    fn error(&mut self, message: &str) -> io::Result<()>;
    /// Writes one undecorated output line.
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The `exit` command was accepted.
    Exit,
    /// Input was exhausted.
    EndOfInput,
}

/// Loop control after one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

enum Reply {
    Ok(String),
    Info(String),
    Lines(Vec<String>),
    Exit,
}

/// A notepad bound to a store and a terminal.
pub struct Session<S: NoteStore, T: Terminal> {
    notepad: Notepad,
    store: S,
    terminal: T,
}

impl<S: NoteStore, T: Terminal> Session<S, T> {
    pub fn new(notepad: Notepad, store: S, terminal: T) -> Self {
        Self {
            notepad,
            store,
            terminal,
        }
    }

    pub fn notepad(&self) -> &Notepad {
        &self.notepad
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Runs until `exit` or end of input.
    ///
    /// Invalid UTF-8 in a line is replaced rather than rejected.
    ///
    /// # Errors
    /// - Returns reading or terminal write failures.
    pub fn run(&mut self, mut input: impl BufRead) -> io::Result<SessionEnd> {
        let mut buffer = Vec::new();
        loop {
            self.terminal.prompt()?;
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                info!(
                    "event=session_end module=shell status=ok reason=end_of_input count={}",
                    self.notepad.len()
                );
                return Ok(SessionEnd::EndOfInput);
            }
            let line = String::from_utf8_lossy(&buffer);
            if self.handle_line(&line)? == Flow::Exit {
                info!(
                    "event=session_end module=shell status=ok reason=exit count={}",
                    self.notepad.len()
                );
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// Parses and executes one input line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                warn!("event=command module=shell status=error error_kind=unknown_command");
                self.terminal.error(&err.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        match self.dispatch(&command) {
            Ok(reply) => {
                debug!(
                    "event=command module=shell status=ok verb={} argc={}",
                    command.verb.as_str(),
                    command.args.len()
                );
                self.render(reply)
            }
            Err(err) => {
                warn!(
                    "event=command module=shell status=error verb={} error_kind={}",
                    command.verb.as_str(),
                    err.kind()
                );
                self.terminal.error(&err.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: &Command<'_>) -> NotepadResult<Reply> {
        let args = command.args.as_slice();
        let reply = match command.verb {
            Verb::Create => {
                self.notepad.create(args)?;
                Reply::Ok("Note was successfully created".to_string())
            }
            Verb::Done => match self.notepad.set_status(args, true)? {
                StatusChange::Changed => Reply::Ok("Note marked as done".to_string()),
                StatusChange::Unchanged => Reply::Info("Note is already done".to_string()),
            },
            Verb::Undone => match self.notepad.set_status(args, false)? {
                StatusChange::Changed => Reply::Ok("Note marked as not done".to_string()),
                StatusChange::Unchanged => Reply::Info("Note is already not done".to_string()),
            },
            Verb::Update => {
                self.notepad.update(args)?;
                Reply::Ok("Note updated".to_string())
            }
            Verb::Delete => {
                self.notepad.delete(args)?;
                Reply::Ok("Note deleted".to_string())
            }
            Verb::List => {
                let listed = self.notepad.list(args)?;
                if listed.is_empty() {
                    Reply::Info("Notepad is empty".to_string())
                } else {
                    Reply::Lines(
                        listed
                            .into_iter()
                            .map(|(position, note)| format_note_line(position, note))
                            .collect(),
                    )
                }
            }
            Verb::Clear => {
                self.notepad.clear(args)?;
                Reply::Ok("Notepad cleared".to_string())
            }
            Verb::Save => {
                let path = self.notepad.save(args, &self.store)?;
                Reply::Ok(format!("Notepad saved to {}", path.display()))
            }
            Verb::Load => {
                let count = self.notepad.load(args, &self.store)?;
                Reply::Ok(format!("Notepad loaded from file ({count} notes)"))
            }
            Verb::Exit => {
                expect_no_args(args)?;
                Reply::Exit
            }
        };
        Ok(reply)
    }

    fn render(&mut self, reply: Reply) -> io::Result<Flow> {
        match reply {
            Reply::Ok(message) => self.terminal.ok(&message)?,
            Reply::Info(message) => self.terminal.info(&message)?,
            Reply::Lines(lines) => {
                for line in &lines {
                    self.terminal.line(line)?;
                }
            }
            Reply::Exit => {
                self.terminal.info("Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}
