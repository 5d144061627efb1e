//! Colored console terminal.

use notepad_core::Terminal;
use std::io::{self, Write};
use yansi::Paint;

const PROMPT_TITLE: &str = "Enter a command and data: ";

/// Writes prefixed, colored status lines to an output stream.
pub struct ConsoleTerminal<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Terminal for ConsoleTerminal<W> {
    fn prompt(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", PROMPT_TITLE.blue())?;
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn ok(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("[OK] {message}").green())
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("[Info] {message}").cyan())
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("[Error] {message}").red())
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }
}
