//! Runtime settings with environment overrides.

use anyhow::{Result, anyhow};
use std::env;

/// Settings shared by every run mode.
#[derive(Debug, Clone)]
pub struct NotesConfig {
    /// Expected extension of note files, without the dot.
    pub extension: String,
    /// Name of the per-directory ignore resource.
    pub ignore_file: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            ignore_file: ".notesignore".to_string(),
        }
    }
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn validate(cfg: &NotesConfig) -> Result<()> {
    if cfg.extension.contains('.') || cfg.extension.chars().any(char::is_whitespace) {
        return Err(anyhow!(
            "invalid notes extension \"{}\": use a bare extension like `md`",
            cfg.extension
        ));
    }
    if cfg.ignore_file.trim().is_empty() || cfg.ignore_file.contains('/') {
        return Err(anyhow!(
            "invalid ignore file name \"{}\": must be a bare filename",
            cfg.ignore_file
        ));
    }
    Ok(())
}

pub fn load_config() -> Result<NotesConfig> {
    let mut cfg = NotesConfig::default();
    cfg.extension = env_or_string("NOTES_EXTENSION", &cfg.extension);
    cfg.ignore_file = env_or_string("NOTES_IGNORE_FILE", &cfg.ignore_file);
    validate(&cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::{NotesConfig, validate};

    #[test]
    fn defaults_validate() {
        assert!(validate(&NotesConfig::default()).is_ok());
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let cfg = NotesConfig {
            extension: ".md".to_string(),
            ..NotesConfig::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn ignore_file_must_be_a_bare_filename() {
        let cfg = NotesConfig {
            ignore_file: "conf/.notesignore".to_string(),
            ..NotesConfig::default()
        };
        assert!(validate(&cfg).is_err());
    }
}
