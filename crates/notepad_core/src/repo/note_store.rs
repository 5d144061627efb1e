//! Store contract and error type.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// File operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Write,
}

impl StoreOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Error raised by notepad stores.
#[derive(Debug)]
pub enum StoreError {
    /// File could not be opened, read, written or replaced.
    Io {
        op: StoreOp,
        path: PathBuf,
        source: std::io::Error,
    },
    /// File contents are not a valid notepad document.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Notes could not be encoded.
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(op: StoreOp, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns whether the file was readable but malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { op, path, source } => {
                write!(f, "cannot {} `{}`: {source}", op.as_str(), path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "malformed notepad file `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "cannot encode notes for `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

/// Persistent store for a full ordered note sequence.
pub trait NoteStore {
    /// Replaces the document at `path` with `notes`.
    fn save(&self, path: &Path, notes: &[Note]) -> StoreResult<()>;
    /// Reads every note stored at `path`, in order.
    fn load(&self, path: &Path) -> StoreResult<Vec<Note>>;
}
