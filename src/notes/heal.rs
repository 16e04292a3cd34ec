//! Repair actions composed from checks. A repair distinguishes "applicable"
//! from "nothing to do": when it cannot tell how to fix a note (say the
//! filename itself does not parse) it stays silent instead of claiming the
//! note is broken.

use crate::error::NoteIoError;
use crate::notes::check;
use crate::notes::note::Note;
use crate::notes::tag::print_tags;
use crate::notes::{SUBJECT_FIELD, TAG_FIELD};

/// The three repairs, in the order the interactive session runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// Strip carriage returns from the raw text and body.
    Eol,
    /// Write the filename-derived subject into the subject field.
    Subject,
    /// Insert the filename-derived sphere/project tags and rewrite the tag
    /// field from the full set.
    Tags,
}

/// Eol runs first on purpose: removing carriage returns can change how the
/// header splits, so the session reloads the note after a successful Eol
/// repair before the other two look at it.
pub const REPAIR_ORDER: [Repair; 3] = [Repair::Eol, Repair::Subject, Repair::Tags];

impl Repair {
    /// `Some(message)` when the repair applies to `note`, `None` when there
    /// is nothing to do — either the note is healthy or the repair is out of
    /// scope for it.
    pub fn diagnose(self, note: &Note) -> Option<String> {
        match self {
            Repair::Eol => {
                let eol = check::eol(note);
                (!eol.ok).then_some(eol.message)
            }
            Repair::Subject => {
                let has = check::has_subject_field(note);
                if !has.ok {
                    return Some(has.message);
                }
                let matching = check::matching_subjects(note);
                (!matching.ok).then_some(matching.message)
            }
            Repair::Tags => {
                // A well-formed filename is the precondition for deriving
                // the sphere/project tags.
                if note.name.is_none() {
                    return None;
                }
                let has = check::has_tags_field(note);
                if !has.ok {
                    return Some(has.message);
                }
                let sphere = check::sphere_filename_tag(note);
                let project = check::project_filename_tag(note);
                (!sphere.ok || !project.ok)
                    .then(|| "tag(s) from filename are missing".to_string())
            }
        }
    }

    /// Mutate the note in memory and persist it.
    pub fn apply(self, note: &mut Note) -> Result<(), NoteIoError> {
        match self {
            Repair::Eol => {
                note.text = note.text.replace('\r', "");
                note.body = note.body.replace('\r', "");
            }
            Repair::Subject => {
                let subject = note
                    .name
                    .as_ref()
                    .map(|n| n.subject.clone())
                    .unwrap_or_default();
                note.header.set(SUBJECT_FIELD, subject);
            }
            Repair::Tags => {
                if let Some(name) = &note.name {
                    note.tags.insert(name.sphere.clone());
                    note.tags.insert(name.project.clone());
                }
                note.header.set(TAG_FIELD, print_tags(&note.tags));
            }
        }
        note.write()
    }
}
