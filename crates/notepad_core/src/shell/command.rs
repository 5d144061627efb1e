//! Command tokenizer and verb table.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Case-sensitive command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Done,
    Undone,
    Update,
    Delete,
    List,
    Clear,
    Save,
    Load,
    Exit,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Done => "done",
            Self::Undone => "undone",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Clear => "clear",
            Self::Save => "save",
            Self::Load => "load",
            Self::Exit => "exit",
        }
    }
}

/// Verb not present in the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown command `{}`", self.0)
    }
}

impl Error for UnknownCommand {}

impl FromStr for Verb {
    type Err = UnknownCommand;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Self::Create),
            "done" => Ok(Self::Done),
            "undone" => Ok(Self::Undone),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "list" => Ok(Self::List),
            "clear" => Ok(Self::Clear),
            "save" => Ok(Self::Save),
            "load" => Ok(Self::Load),
            "exit" => Ok(Self::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// One parsed input line, borrowing its words from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub verb: Verb,
    pub args: Vec<&'a str>,
}

/// Splits a line on whitespace runs into `(verb, args)`.
///
/// Returns `None` for blank input.
pub fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    Some((verb, words.collect()))
}

/// Parses a line into a command.
///
/// # Errors
/// - Returns `UnknownCommand` when the first word is not a known verb.
pub fn parse_line(line: &str) -> Result<Option<Command<'_>>, UnknownCommand> {
    let Some((verb, args)) = tokenize(line) else {
        return Ok(None);
    };
    Ok(Some(Command {
        verb: verb.parse()?,
        args,
    }))
}
