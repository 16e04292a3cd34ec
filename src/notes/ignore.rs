//! Filename ignore patterns, loaded from the `.notesignore` resource.

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Compiled ignore patterns. Each pattern must match the bare filename in
/// full. The ignore file's own name is always excluded, whether or not the
/// file exists.
#[derive(Debug)]
pub struct IgnoreList {
    patterns: Vec<Regex>,
}

impl IgnoreList {
    /// Compile patterns from an iterator of lines. Blank lines are skipped.
    pub fn from_patterns<I, S>(ignore_file: &str, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw = vec![regex::escape(ignore_file)];
        raw.extend(
            lines
                .into_iter()
                .map(|l| l.as_ref().trim_end().to_string())
                .filter(|l| !l.is_empty()),
        );

        let mut patterns = Vec::with_capacity(raw.len());
        for line in raw {
            let anchored = format!("^(?:{line})$");
            let re = Regex::new(&anchored)
                .map_err(|err| anyhow!("invalid ignore pattern \"{line}\": {err}"))?;
            patterns.push(re);
        }
        Ok(Self { patterns })
    }

    /// Read `root/<ignore_file>` if present. A missing file just means no
    /// extra patterns.
    pub fn load(root: &Path, ignore_file: &str) -> Result<Self> {
        let path = root.join(ignore_file);
        if !path.exists() {
            return Self::from_patterns(ignore_file, std::iter::empty::<&str>());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_patterns(ignore_file, raw.lines())
    }

    pub fn is_ignored(&self, filename: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(filename))
    }
}
