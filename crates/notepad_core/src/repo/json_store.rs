//! JSON file store.
//!
//! # Responsibility
//! - Encode notes as a JSON array of `{"text", "status"}` objects.
//! - Replace target files atomically through a sibling temp file.
//! - Keep the permissions of a document that is being replaced.
//!
//! # Invariants
//! - The temp file lives in the target directory so `persist` is a rename.
//! - Decoding validates every note before anything is returned.

use super::note_store::{NoteStore, StoreError, StoreOp, StoreResult};
use crate::model::note::Note;
use log::{error, info};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::{Builder, NamedTempFile};

/// Flat JSON file store.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl NoteStore for JsonFileStore {
    fn save(&self, path: &Path, notes: &[Note]) -> StoreResult<()> {
        let started_at = Instant::now();
        match write_atomically(path, notes) {
            Ok(()) => {
                info!(
                    "event=notepad_save module=repo status=ok path={} count={} duration_ms={}",
                    path.display(),
                    notes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=notepad_save module=repo status=error path={} duration_ms={} error={}",
                    path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn load(&self, path: &Path) -> StoreResult<Vec<Note>> {
        let started_at = Instant::now();
        let result = std::fs::read(path)
            .map_err(|err| StoreError::io(StoreOp::Read, path, err))
            .and_then(|bytes| {
                serde_json::from_slice::<Vec<Note>>(&bytes).map_err(|source| StoreError::Decode {
                    path: path.to_path_buf(),
                    source,
                })
            });

        match &result {
            Ok(notes) => info!(
                "event=notepad_load module=repo status=ok path={} count={} duration_ms={}",
                path.display(),
                notes.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=notepad_load module=repo status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

fn write_atomically(path: &Path, notes: &[Note]) -> StoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = create_temp_in(dir).map_err(|err| StoreError::io(StoreOp::Write, path, err))?;

    let mut writer = BufWriter::new(temp);
    serde_json::to_writer(&mut writer, notes).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .flush()
        .map_err(|err| StoreError::io(StoreOp::Write, path, err))?;
    let temp = writer
        .into_inner()
        .map_err(|err| StoreError::io(StoreOp::Write, path, err.into_error()))?;

    match std::fs::metadata(path) {
        Ok(existing) if existing.is_file() => temp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|err| StoreError::io(StoreOp::Write, path, err))?,
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(StoreError::io(StoreOp::Write, path, err)),
    }

    temp.persist(path)
        .map_err(|err| StoreError::io(StoreOp::Write, path, err.error))?;
    Ok(())
}

/// Temp files default to 0600; request 0666 so new documents follow the umask.
fn create_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::JsonFileStore;
    use crate::model::note::Note;
    use crate::repo::note_store::{NoteStore, StoreError, StoreOp};

    #[test]
    fn save_writes_status_field_name() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("notes.json");
        let mut note = Note::new("ship it").expect("valid note");
        note.done = true;

        JsonFileStore::new()
            .save(&path, &[note])
            .expect("save should succeed");

        let raw = std::fs::read_to_string(&path).expect("saved file should be readable");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value, serde_json::json!([{ "text": "ship it", "status": true }]));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let err = JsonFileStore::new()
            .load(&dir.path().join("absent.json"))
            .expect_err("missing file must fail");
        assert!(matches!(
            err,
            StoreError::Io {
                op: StoreOp::Read,
                ..
            }
        ));
        assert!(!err.is_decode());
    }

    #[test]
    fn save_into_missing_directory_leaves_no_file() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("nested").join("notes.json");
        let err = JsonFileStore::new()
            .save(&path, &[])
            .expect_err("missing parent directory must fail");
        assert!(matches!(
            err,
            StoreError::Io {
                op: StoreOp::Write,
                ..
            }
        ));
        assert!(!path.exists());
    }
}
