//! The note entity: a file plus everything parsed out of it.

use crate::error::NoteIoError;
use crate::notes::TAG_FIELD;
use crate::notes::header::{Header, split_text};
use crate::notes::name::{Name, parse_filename};
use crate::notes::tag::parse_tags;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// A regular file discovered by the walk, possibly paired with a same-stem
/// "annex" subdirectory. The walker assigns the annex once; it never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct NoteFile {
    pub path: PathBuf,
    pub annex: Option<PathBuf>,
}

impl NoteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            annex: None,
        }
    }
}

/// One loaded note. `header`, `body` and `tags` are always what
/// [`split_text`] and [`parse_tags`] derive from `text`; mutations go
/// through the field/tag members and are committed by [`Note::write`].
#[derive(Debug, Clone)]
pub struct Note {
    pub file: NoteFile,
    pub name: Option<Name>,
    pub text: String,
    pub header: Header,
    pub body: String,
    pub tags: BTreeSet<String>,
}

impl Note {
    /// Read the file and parse filename, header, body and tags.
    pub fn load(file: NoteFile) -> Result<Self, NoteIoError> {
        let text = fs::read_to_string(&file.path).map_err(NoteIoError::wrap(&file.path))?;
        Ok(Self::from_text(file, text))
    }

    /// Build a note from already-loaded text. Unparsable filenames leave
    /// `name` empty; an unparsable tag field leaves `tags` empty.
    pub fn from_text(file: NoteFile, text: String) -> Self {
        let name = parse_filename(&file.path);
        let (header, body) = split_text(&text);
        let tags = header
            .get(TAG_FIELD)
            .and_then(parse_tags)
            .unwrap_or_default();
        Self {
            file,
            name,
            text,
            header,
            body,
            tags,
        }
    }

    /// Serialize header and body back into file format: one `Name: value`
    /// line per field in insertion order, a blank separator when the header
    /// is non-empty, then the body verbatim.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for (name, value) in self.header.iter() {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        if !self.header.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.body);
        out
    }

    /// Commit the current header and body to disk.
    pub fn write(&self) -> Result<(), NoteIoError> {
        fs::write(&self.file.path, self.render()).map_err(NoteIoError::wrap(&self.file.path))
    }
}
