//! Header block grammar: leading `Name: value` lines, a blank separator,
//! then free-text body.

/// Insertion-ordered field map. Keys are unique; assigning an existing key
/// replaces its value in place so serialization keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<(String, String)>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Parse one `Name: value` line. The name is the non-space run before the
/// first colon; the value is everything after it, further colons included.
/// Both sides come back trimmed. A line with whitespace around the name, a
/// carriage return anywhere, or no colon at all does not match.
pub fn parse_header_field(line: &str) -> Option<(String, String)> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if line.contains('\r') {
        return None;
    }
    let (name, value) = line.split_once(':')?;
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// Split `text` into lines the way a line-reading loop would: terminators
/// are `\n` only (carriage returns stay in the line) and a trailing
/// terminator does not produce an extra empty line.
fn read_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Split raw note text into its header map and body remainder.
///
/// Leading lines matching the field grammar fill the header; the first line
/// that does not match is the boundary. With no header at all the boundary
/// line opens the body, even when empty — which is why empty input still
/// yields a body of `"\n"`. With a header, a blank boundary line is the
/// separator and is dropped; a non-blank one opens the body.
pub fn split_text(text: &str) -> (Header, String) {
    let mut header = Header::new();
    let mut body = String::new();

    let mut lines = read_lines(text).into_iter();
    let boundary = loop {
        match lines.next() {
            None => break "",
            Some(line) => match parse_header_field(line) {
                Some((name, value)) => header.set(&name, value),
                None => break line,
            },
        }
    };

    if header.is_empty() || !boundary.trim().is_empty() {
        body.push_str(boundary);
        body.push('\n');
    }
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }

    (header, body)
}
