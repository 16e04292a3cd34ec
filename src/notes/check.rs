//! Read-only checks over a loaded note. Each check evaluates one predicate
//! and never mutates; run any subset in any order.

use crate::notes::note::Note;
use crate::notes::{SUBJECT_FIELD, TAG_FIELD};
use std::fs;

/// Outcome of a single check: pass, or fail with a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub ok: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

pub fn has_subject_field(note: &Note) -> Verdict {
    if note.header.contains(SUBJECT_FIELD) {
        Verdict::pass()
    } else {
        Verdict::fail(format!("missing \"{SUBJECT_FIELD}\" header"))
    }
}

pub fn has_tags_field(note: &Note) -> Verdict {
    if note.header.contains(TAG_FIELD) {
        Verdict::pass()
    } else {
        Verdict::fail(format!("missing \"{TAG_FIELD}\" header"))
    }
}

/// Fails only when both the filename-derived subject and the header field
/// exist and differ. The absence of either is not this check's concern.
pub fn matching_subjects(note: &Note) -> Verdict {
    let name_subject = note.name.as_ref().map(|n| n.subject.as_str());
    let field_subject = note.header.get(SUBJECT_FIELD);
    match (name_subject, field_subject) {
        (Some(a), Some(b)) if a != b => Verdict::fail("subject mismatch"),
        _ => Verdict::pass(),
    }
}

/// A paired annex directory must not be empty. An annex that cannot be
/// listed fails the check as well.
pub fn non_empty_annex(note: &Note) -> Verdict {
    let Some(annex) = &note.file.annex else {
        return Verdict::pass();
    };
    match fs::read_dir(annex) {
        Ok(mut entries) => {
            if entries.next().is_none() {
                Verdict::fail(format!("annex is empty: {}", annex.display()))
            } else {
                Verdict::pass()
            }
        }
        Err(err) => Verdict::fail(format!("annex unreadable: {}: {err}", annex.display())),
    }
}

pub fn extension(note: &Note, wanted: &str) -> Verdict {
    let ext = note.file.path.extension().and_then(|e| e.to_str());
    if ext == Some(wanted) {
        Verdict::pass()
    } else {
        Verdict::fail("wrong extension")
    }
}

pub fn filename(note: &Note) -> Verdict {
    if note.name.is_some() {
        Verdict::pass()
    } else {
        Verdict::fail("filename format")
    }
}

pub fn eol(note: &Note) -> Verdict {
    if note.text.contains('\r') {
        Verdict::fail("CR detected")
    } else {
        Verdict::pass()
    }
}

fn filename_tag(note: &Note, tag: Option<&str>, what: &str) -> Verdict {
    match tag {
        Some(tag) if !note.tags.contains(tag) => {
            Verdict::fail(format!("{what} from filename not found in tags"))
        }
        _ => Verdict::pass(),
    }
}

pub fn sphere_filename_tag(note: &Note) -> Verdict {
    filename_tag(
        note,
        note.name.as_ref().map(|n| n.sphere.as_str()),
        "sphere of life",
    )
}

pub fn project_filename_tag(note: &Note) -> Verdict {
    filename_tag(
        note,
        note.name.as_ref().map(|n| n.project.as_str()),
        "project",
    )
}
