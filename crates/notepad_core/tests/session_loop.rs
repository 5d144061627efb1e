use notepad_core::{
    JsonFileStore, Note, NoteStore, Notepad, Session, SessionEnd, StoreError, StoreOp,
    StoreResult, Terminal,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Out {
    Ok(String),
    Info(String),
    Error(String),
    Line(String),
}

#[derive(Default)]
struct RecordingTerminal {
    prompts: usize,
    output: Vec<Out>,
}

impl Terminal for RecordingTerminal {
    fn prompt(&mut self) -> io::Result<()> {
        self.prompts += 1;
        Ok(())
    }

    fn ok(&mut self, message: &str) -> io::Result<()> {
        self.output.push(Out::Ok(message.to_string()));
        Ok(())
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        self.output.push(Out::Info(message.to_string()));
        Ok(())
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.output.push(Out::Error(message.to_string()));
        Ok(())
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(Out::Line(text.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct MemoryStore {
    files: RefCell<HashMap<PathBuf, Vec<Note>>>,
}

impl NoteStore for MemoryStore {
    fn save(&self, path: &Path, notes: &[Note]) -> StoreResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), notes.to_vec());
        Ok(())
    }

    fn load(&self, path: &Path) -> StoreResult<Vec<Note>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| StoreError::Io {
            op: StoreOp::Read,
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }
}

fn run(script: &str) -> (SessionEnd, Session<MemoryStore, RecordingTerminal>) {
    let mut session = Session::new(
        Notepad::new(),
        MemoryStore::default(),
        RecordingTerminal::default(),
    );
    let end = session.run(Cursor::new(script.as_bytes())).unwrap();
    (end, session)
}

fn lines(output: &[Out]) -> Vec<&str> {
    output
        .iter()
        .filter_map(|out| match out {
            Out::Line(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn create_then_list_shows_position_and_text() {
    let (end, session) = run("create buy milk\nlist\n");

    assert_eq!(end, SessionEnd::EndOfInput);
    let output = &session.terminal().output;
    assert_eq!(
        output[0],
        Out::Ok("Note was successfully created".to_string())
    );
    assert_eq!(lines(output), vec!["1: buy milk"]);
}

#[test]
fn blank_lines_reprompt_without_output() {
    let (_, session) = run("\n   \n\t\n");

    assert!(session.terminal().output.is_empty());
    assert_eq!(session.terminal().prompts, 4, "three lines plus end of input");
}

#[test]
fn unknown_and_miscased_verbs_are_reported() {
    let (end, session) = run("frobnicate 1\nCreate x\nlist\n");

    assert_eq!(end, SessionEnd::EndOfInput);
    let output = &session.terminal().output;
    assert_eq!(
        output[0],
        Out::Error("unknown command `frobnicate`".to_string())
    );
    assert_eq!(output[1], Out::Error("unknown command `Create`".to_string()));
    assert_eq!(output[2], Out::Info("Notepad is empty".to_string()));
    assert!(session.notepad().is_empty());
}

#[test]
fn done_twice_reports_already_done() {
    let (_, session) = run("create task\ndone 1\ndone 1\nlist\n");

    let output = &session.terminal().output;
    assert_eq!(output[1], Out::Ok("Note marked as done".to_string()));
    assert_eq!(output[2], Out::Info("Note is already done".to_string()));
    assert_eq!(lines(output), vec!["1: task / Status: Done"]);
}

#[test]
fn undone_twice_reports_already_not_done() {
    let mut note = Note::new("task").unwrap();
    note.done = true;
    let mut session = Session::new(
        Notepad::from_notes(vec![note]),
        MemoryStore::default(),
        RecordingTerminal::default(),
    );

    session
        .run(Cursor::new(&b"undone 1\nundone 1\nlist\n"[..]))
        .unwrap();

    let output = &session.terminal().output;
    assert_eq!(output[0], Out::Ok("Note marked as not done".to_string()));
    assert_eq!(output[1], Out::Info("Note is already not done".to_string()));
    assert_eq!(lines(output), vec!["1: task"]);
}

#[test]
fn errors_do_not_end_the_session() {
    let script = "create\ndone\ndone x\ndelete 5\nupdate 1\nclear now\ncreate survived\nlist\n";
    let (end, session) = run(script);

    assert_eq!(end, SessionEnd::EndOfInput);
    let errors: Vec<_> = session
        .terminal()
        .output
        .iter()
        .filter(|out| matches!(out, Out::Error(_)))
        .collect();
    assert_eq!(errors.len(), 6);
    assert_eq!(
        errors[0],
        &Out::Error("missing note argument".to_string())
    );
    assert_eq!(errors[1], &Out::Error("invalid argument".to_string()));
    assert_eq!(
        errors[2],
        &Out::Error("position `x` is not a number".to_string())
    );
    assert_eq!(
        errors[3],
        &Out::Error("invalid position 5 (notepad has 0 notes)".to_string())
    );
    assert_eq!(lines(&session.terminal().output), vec!["1: survived"]);
}

#[test]
fn delete_renumbers_listing() {
    let (_, session) = run("create a\ncreate b\ncreate c\ndelete 2\nlist\n");

    assert_eq!(lines(&session.terminal().output), vec!["1: a", "2: c"]);
}

#[test]
fn exit_stops_reading_further_lines() {
    let (end, session) = run("create kept\nexit\ncreate ignored\n");

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(session.notepad().len(), 1);
    assert_eq!(
        session.terminal().output.last(),
        Some(&Out::Info("Goodbye!".to_string()))
    );
}

#[test]
fn exit_with_arguments_is_rejected() {
    let (end, session) = run("exit now\n");

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(
        session.terminal().output,
        vec![Out::Error("invalid argument".to_string())]
    );
}

#[test]
fn save_clear_load_restores_notes_through_store() {
    let (_, session) = run("create one\ncreate two\ndone 2\nsave pad.json\nclear\nload pad.json\nlist\n");

    assert_eq!(
        lines(&session.terminal().output),
        vec!["1: one", "2: two / Status: Done"]
    );
    assert!(session
        .terminal()
        .output
        .contains(&Out::Ok("Notepad loaded from file (2 notes)".to_string())));
}

#[test]
fn failed_load_keeps_current_notes() {
    let (_, session) = run("create stay\nload missing.json\nlist\n");

    let output = &session.terminal().output;
    assert!(matches!(&output[1], Out::Error(message) if message.starts_with("cannot read")));
    assert_eq!(lines(output), vec!["1: stay"]);
}

#[test]
fn invalid_utf8_input_is_tolerated() {
    let mut session = Session::new(
        Notepad::new(),
        JsonFileStore::new(),
        RecordingTerminal::default(),
    );
    let input: &[u8] = b"create caf\xff\nlist\n";

    session.run(input).unwrap();

    assert_eq!(session.notepad().len(), 1);
    assert_eq!(session.notepad().notes()[0].text, "caf\u{fffd}");
}

#[test]
fn json_store_session_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pad.json");
    let script = format!("create on disk\nsave {}\n", path.display());

    let mut session = Session::new(
        Notepad::new(),
        JsonFileStore::new(),
        RecordingTerminal::default(),
    );
    session.run(Cursor::new(script.into_bytes())).unwrap();

    let mut reloaded = Notepad::new();
    reloaded.load_from(&path, &JsonFileStore::new()).unwrap();
    assert_eq!(reloaded.notes(), &[Note::new("on disk").unwrap()]);
}
