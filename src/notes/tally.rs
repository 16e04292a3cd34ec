//! Tag frequency accumulator shared by the visitors that report statistics.

use crate::notes::note::Note;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Three frequency tables: sphere tags, project tags, and everything else.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagTally {
    pub sphere: BTreeMap<String, u64>,
    pub project: BTreeMap<String, u64>,
    pub other: BTreeMap<String, u64>,
}

impl TagTally {
    /// Count one note. The filename-derived sphere and project are counted
    /// once per note whether or not they also appear in the tag field; a tag
    /// already known as a sphere or project label is never double-counted in
    /// the "other" table.
    pub fn record(&mut self, note: &Note) {
        if let Some(name) = &note.name {
            *self.sphere.entry(name.sphere.clone()).or_insert(0) += 1;
            *self.project.entry(name.project.clone()).or_insert(0) += 1;
        }

        for tag in &note.tags {
            if !self.sphere.contains_key(tag) && !self.project.contains_key(tag) {
                *self.other.entry(tag.clone()).or_insert(0) += 1;
            }
        }
    }

    /// Render the three sections: each tag left-aligned in a fixed column,
    /// count right-aligned, with a placeholder line for an empty section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_section(&mut out, "Sphere of life", &self.sphere);
        out.push('\n');
        render_section(&mut out, "Project", &self.project);
        out.push('\n');
        render_section(&mut out, "Tags", &self.other);
        out
    }
}

fn render_section(out: &mut String, title: &str, counts: &BTreeMap<String, u64>) {
    let _ = writeln!(out, "{title}:");
    if counts.is_empty() {
        out.push_str("  <no tags>\n");
        return;
    }
    for (tag, count) in counts {
        let _ = writeln!(out, "  {tag:<20}{count:>4}");
    }
}
