//! Directory walk: ignore filtering, annex pairing and visitor dispatch.

use crate::error::NoteIoError;
use crate::notes::ignore::IgnoreList;
use crate::notes::note::NoteFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Callbacks driven by [`visit`]. Returning `Ok(false)` from either hook
/// stops the walk immediately.
pub trait DirectoryVisitor {
    /// An unpaired directory (no file shares its stem).
    fn directory(&mut self, path: &Path) -> Result<bool>;
    /// A regular file, with its annex attached when one was paired.
    fn file(&mut self, file: &NoteFile) -> Result<bool>;
}

/// Walk the immediate children of `root`.
///
/// Children matching an ignore pattern are dropped up front. Each file then
/// claims the first remaining directory with the same stem as its annex;
/// every directory is consumed at most once. Leftover directories are
/// reported first, then every file, both in listing order (sorted by name so
/// the walk is deterministic).
///
/// An error from `visitor.file` that is a [`NoteIoError`] is confined to
/// that file: it is written to stderr and the walk continues. Anything else
/// aborts the run.
pub fn visit(root: &Path, ignores: &IgnoreList, visitor: &mut dyn DirectoryVisitor) -> Result<bool> {
    let entries =
        fs::read_dir(root).with_context(|| format!("failed to read {}", root.display()))?;

    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut filepaths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", root.display()))?;
        let path = entry.path();
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if ignores.is_ignored(filename) {
            continue;
        }
        let kind = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if kind.is_dir() {
            dirs.push(path);
        } else if kind.is_file() {
            filepaths.push(path);
        }
    }
    dirs.sort();
    filepaths.sort();

    let mut files: Vec<NoteFile> = Vec::with_capacity(filepaths.len());
    for path in filepaths {
        let mut file = NoteFile::new(path);
        let stem = file.path.file_stem().map(ToOwned::to_owned);
        if let Some(stem) = stem
            && let Some(idx) = dirs
                .iter()
                .position(|d| d.file_stem() == Some(stem.as_os_str()))
        {
            file.annex = Some(dirs.remove(idx));
        }
        files.push(file);
    }

    for dir in &dirs {
        if !visitor.directory(dir)? {
            return Ok(false);
        }
    }

    for file in &files {
        match visitor.file(file) {
            Ok(true) => {}
            Ok(false) => return Ok(false),
            Err(err) if err.is::<NoteIoError>() => {
                eprintln!("{err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{DirectoryVisitor, visit};
    use crate::notes::ignore::IgnoreList;
    use crate::notes::note::NoteFile;
    use anyhow::Result;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    #[derive(Default)]
    struct Recorder {
        dirs: Vec<PathBuf>,
        files: Vec<(PathBuf, Option<PathBuf>)>,
        stop_after_files: Option<usize>,
    }

    impl DirectoryVisitor for Recorder {
        fn directory(&mut self, path: &Path) -> Result<bool> {
            self.dirs.push(path.to_path_buf());
            Ok(true)
        }

        fn file(&mut self, file: &NoteFile) -> Result<bool> {
            self.files.push((file.path.clone(), file.annex.clone()));
            Ok(self
                .stop_after_files
                .is_none_or(|limit| self.files.len() < limit))
        }
    }

    fn empty_ignores() -> IgnoreList {
        IgnoreList::from_patterns(".notesignore", std::iter::empty::<&str>()).expect("compile")
    }

    #[test]
    fn pairs_same_stem_directories_as_annexes() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("a b note.md"), "x\n").expect("write");
        fs::create_dir(tmp.path().join("a b note")).expect("mkdir");
        fs::create_dir(tmp.path().join("orphan")).expect("mkdir");

        let mut rec = Recorder::default();
        assert!(visit(tmp.path(), &empty_ignores(), &mut rec).expect("walk"));

        assert_eq!(rec.dirs, vec![tmp.path().join("orphan")]);
        assert_eq!(rec.files.len(), 1);
        assert_eq!(rec.files[0].1, Some(tmp.path().join("a b note")));
    }

    #[test]
    fn ignored_names_are_dropped_before_pairing() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("keep.md"), "x\n").expect("write");
        fs::write(tmp.path().join("drop.md"), "x\n").expect("write");
        fs::write(tmp.path().join(".notesignore"), "drop.*\n").expect("write");

        let ignores = IgnoreList::load(tmp.path(), ".notesignore").expect("load");
        let mut rec = Recorder::default();
        assert!(visit(tmp.path(), &ignores, &mut rec).expect("walk"));

        let names: Vec<String> = rec
            .files
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["keep.md"]);
    }

    #[test]
    fn visitor_returning_false_stops_the_walk() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("one.md"), "x\n").expect("write");
        fs::write(tmp.path().join("two.md"), "x\n").expect("write");

        let mut rec = Recorder {
            stop_after_files: Some(1),
            ..Recorder::default()
        };
        assert!(!visit(tmp.path(), &empty_ignores(), &mut rec).expect("walk"));
        assert_eq!(rec.files.len(), 1);
    }
}
