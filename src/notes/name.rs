//! Filename grammar: `<sphere> <project> <subject>.md`.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Sphere and project are single non-space runs separated by one literal
/// space; the subject is the rest of the stem and may contain spaces but no
/// other whitespace.
static STEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(\S+) (\S+) ([\S ]+)\z").expect("stem grammar"));

/// Components derived from a well-formed filename. All-or-nothing: a stem
/// that does not match the grammar yields no `Name` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub sphere: String,
    pub project: String,
    pub subject: String,
}

/// Parse the stem of `path` against the naming grammar. The first two tokens
/// become `#`-prefixed sphere and project tags; the remainder is the subject,
/// rejected when it starts or ends with whitespace (which is how a doubled
/// delimiter space surfaces).
pub fn parse_filename(path: &Path) -> Option<Name> {
    let stem = path.file_stem()?.to_str()?;
    let captures = STEM_RE.captures(stem)?;

    let subject = captures.get(3)?.as_str();
    let first = subject.chars().next()?;
    let last = subject.chars().next_back()?;
    if first.is_whitespace() || last.is_whitespace() {
        return None;
    }

    Some(Name {
        sphere: format!("#{}", &captures[1]),
        project: format!("#{}", &captures[2]),
        subject: subject.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_filename;
    use std::path::Path;

    fn parse(p: &str) -> Option<super::Name> {
        parse_filename(Path::new(p))
    }

    #[test]
    fn simple_stem_parses() {
        let name = parse("./inro desktop The subject.md").expect("parses");
        assert_eq!(name.sphere, "#inro");
        assert_eq!(name.project, "#desktop");
        assert_eq!(name.subject, "The subject");
    }

    #[test]
    fn accented_characters_are_ordinary_token_characters() {
        let name = parse("./inro desktop Arrêt.md").expect("parses");
        assert_eq!(name.subject, "Arrêt");
    }

    #[test]
    fn any_printable_character_is_allowed_in_tokens() {
        let name = parse("./+=*\\ d!@#$%^&() ~`|,.<>{}[].md").expect("parses");
        assert_eq!(name.sphere, "#+=*\\");
        assert_eq!(name.project, "#d!@#$%^&()");
        assert_eq!(name.subject, "~`|,.<>{}[]");
    }

    #[test]
    fn empty_and_short_stems_fail() {
        assert!(parse("").is_none());
        assert!(parse("./.md").is_none());
        assert!(parse("./inro.md").is_none());
        assert!(parse("./inro desktop.md").is_none());
    }

    #[test]
    fn surrounding_spaces_fail() {
        assert!(parse("./ inro desktop Arrêt.md").is_none());
        assert!(parse("./inro desktop Arrêt .md").is_none());
    }

    #[test]
    fn doubled_delimiter_spaces_fail() {
        assert!(parse("./inro  desktop Two spaces.md").is_none());
        assert!(parse("./inro desktop  Two spaces.md").is_none());
        assert!(parse("./inro desktop  .md").is_none());
    }

    #[test]
    fn non_space_whitespace_fails() {
        assert!(parse("./in\tro desktop OK.md").is_none());
        assert!(parse("./in\rro desktop OK.md").is_none());
        assert!(parse("./in\nro desktop OK.md").is_none());
    }
}
