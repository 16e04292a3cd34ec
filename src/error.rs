use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An I/O failure tied to one note file. The walker downcasts to this type
/// at the per-file boundary: the failure is reported and the walk moves on,
/// while any other error aborts the run.
#[derive(Debug, Error)]
#[error("on file \"{}\": {source}", path.display())]
pub struct NoteIoError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl NoteIoError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn wrap(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::new(path, source)
    }
}
