//! Visitor strategies over the walked tree, and the entry point for each
//! run mode.

use crate::notes::check::{self, Verdict};
use crate::notes::config::NotesConfig;
use crate::notes::heal::{REPAIR_ORDER, Repair};
use crate::notes::ignore::IgnoreList;
use crate::notes::note::{Note, NoteFile};
use crate::notes::session::{Decision, RepairIo, RepairSession};
use crate::notes::tally::TagTally;
use crate::notes::walk::{DirectoryVisitor, visit};
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// One diagnostic line. Directory-level warnings carry no path.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub path: Option<String>,
    pub message: String,
}

impl Warning {
    fn for_note(note: &Note, message: impl Into<String>) -> Self {
        Self {
            path: Some(note.file.path.display().to_string()),
            message: message.into(),
        }
    }

    fn bare(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "warning({path}): {}", self.message),
            None => write!(f, "warning: {}", self.message),
        }
    }
}

/// Runs every check against every note and collects one warning per
/// failure. Never mutates, never stops early.
struct WarningVisitor<'a> {
    config: &'a NotesConfig,
    warnings: Vec<Warning>,
}

impl WarningVisitor<'_> {
    fn check(&mut self, note: &Note, verdict: Verdict) {
        if !verdict.ok {
            self.warnings.push(Warning::for_note(note, verdict.message));
        }
    }
}

impl DirectoryVisitor for WarningVisitor<'_> {
    fn directory(&mut self, path: &Path) -> Result<bool> {
        self.warnings.push(Warning::bare(format!(
            "orphan directory found: {}",
            path.display()
        )));
        Ok(true)
    }

    fn file(&mut self, file: &NoteFile) -> Result<bool> {
        let note = Note::load(file.clone())?;

        self.check(&note, check::non_empty_annex(&note));
        self.check(&note, check::extension(&note, &self.config.extension));
        self.check(&note, check::filename(&note));
        self.check(&note, check::has_subject_field(&note));
        self.check(&note, check::has_tags_field(&note));
        self.check(&note, check::matching_subjects(&note));
        self.check(&note, check::eol(&note));
        self.check(&note, check::sphere_filename_tag(&note));
        self.check(&note, check::project_filename_tag(&note));

        Ok(true)
    }
}

/// Loads each note purely to feed the tag tally.
#[derive(Default)]
struct PrintTagsVisitor {
    tally: TagTally,
}

impl DirectoryVisitor for PrintTagsVisitor {
    fn directory(&mut self, _path: &Path) -> Result<bool> {
        Ok(true)
    }

    fn file(&mut self, file: &NoteFile) -> Result<bool> {
        let note = Note::load(file.clone())?;
        self.tally.record(&note);
        Ok(true)
    }
}

/// Result of an interactive repair run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepairOutcome {
    pub repaired: usize,
    pub aborted: bool,
}

/// Interactive repair loop: offers each applicable repair through the
/// session, in fixed order, reloading the note after an end-of-line repair
/// since stripping carriage returns can change the header split.
struct HealerVisitor<'io> {
    session: RepairSession<'io>,
    outcome: RepairOutcome,
}

impl DirectoryVisitor for HealerVisitor<'_> {
    fn directory(&mut self, _path: &Path) -> Result<bool> {
        Ok(true)
    }

    fn file(&mut self, file: &NoteFile) -> Result<bool> {
        let mut note = Note::load(file.clone())?;
        self.session.begin_file();

        for repair in REPAIR_ORDER {
            let Some(message) = repair.diagnose(&note) else {
                continue;
            };
            match self.session.decide(&file.path, &message)? {
                Decision::Apply => {
                    repair.apply(&mut note)?;
                    self.session.say("REPAIRED!")?;
                    self.outcome.repaired += 1;
                    if repair == Repair::Eol {
                        note = Note::load(file.clone())?;
                    }
                }
                Decision::Decline => {}
                Decision::SkipFile => break,
                Decision::AbortRun => {
                    self.outcome.aborted = true;
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}

/// Audit-only mode: walk the tree and return every warning.
pub fn run_audit(root: &Path, config: &NotesConfig) -> Result<Vec<Warning>> {
    let ignores = IgnoreList::load(root, &config.ignore_file)?;
    let mut visitor = WarningVisitor {
        config,
        warnings: Vec::new(),
    };
    visit(root, &ignores, &mut visitor)?;
    Ok(visitor.warnings)
}

/// Statistics mode: walk the tree and return the tag frequency tables.
pub fn run_stats(root: &Path, config: &NotesConfig) -> Result<TagTally> {
    let ignores = IgnoreList::load(root, &config.ignore_file)?;
    let mut visitor = PrintTagsVisitor::default();
    visit(root, &ignores, &mut visitor)?;
    Ok(visitor.tally)
}

/// Interactive repair mode. `io` supplies the transcript sink and answer
/// source; a `quit` answer stops the walk but keeps repairs already made.
pub fn run_repair(root: &Path, config: &NotesConfig, io: &mut dyn RepairIo) -> Result<RepairOutcome> {
    let ignores = IgnoreList::load(root, &config.ignore_file)?;
    let mut visitor = HealerVisitor {
        session: RepairSession::new(io),
        outcome: RepairOutcome::default(),
    };
    visit(root, &ignores, &mut visitor)?;
    Ok(visitor.outcome)
}
