//! Interactive repair session: prompt IO abstraction, answer parsing, and
//! the scope state machine shared across the files of one run.

use anyhow::{Context, Result};
use std::io::Write as _;
use std::path::Path;

/// Transcript sink and line-input source for the repair loop. Injectable so
/// tests can script a whole session.
pub trait RepairIo {
    fn say(&mut self, line: &str) -> Result<()>;
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Real console: lines to stdout, answers from stdin.
#[derive(Debug, Default)]
pub struct ConsoleIo;

impl RepairIo for ConsoleIo {
    fn say(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        std::io::stdout().flush().context("failed to flush stdout")?;
        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("failed to read answer")?;
        Ok(input)
    }
}

/// One user answer. Matching is case-insensitive and accepts the full word
/// or its first letter; anything unrecognized (including an empty line)
/// counts as `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    File,
    Skip,
    All,
    Quit,
}

fn parse_answer(input: &str) -> Answer {
    let lowered = input.trim().to_lowercase();
    let matches = |word: &str| lowered == word || lowered == word[..1];
    if matches("yes") {
        Answer::Yes
    } else if matches("file") {
        Answer::File
    } else if matches("skip") {
        Answer::Skip
    } else if matches("all") {
        Answer::All
    } else if matches("quit") {
        Answer::Quit
    } else {
        Answer::No
    }
}

/// What the session decided for one offered repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Apply this repair.
    Apply,
    /// Skip this repair only.
    Decline,
    /// Skip this and every remaining repair for the current file.
    SkipFile,
    /// Abort the whole walk. Already-applied repairs stay committed.
    AbortRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileScope {
    Ask,
    ApplyRest,
    SkipRest,
}

const PROMPT: &str = "Repair? (y|[n]|file|skip|all|quit) ";

/// Scope state for one repair run. The `all` answer persists across files;
/// `file` and `skip` reset when the next file begins.
pub struct RepairSession<'io> {
    io: &'io mut dyn RepairIo,
    all_files: bool,
    file_scope: FileScope,
}

impl<'io> RepairSession<'io> {
    pub fn new(io: &'io mut dyn RepairIo) -> Self {
        Self {
            io,
            all_files: false,
            file_scope: FileScope::Ask,
        }
    }

    /// Reset the per-file scope. Call before offering a file's repairs.
    pub fn begin_file(&mut self) {
        self.file_scope = FileScope::Ask;
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        self.io.say(line)
    }

    /// Offer one applicable repair for `path` and decide its fate. The
    /// failure message is announced unless this file is already being
    /// skipped; the user is prompted only when no wider scope answers for
    /// them.
    pub fn decide(&mut self, path: &Path, message: &str) -> Result<Decision> {
        if self.file_scope == FileScope::SkipRest {
            return Ok(Decision::SkipFile);
        }

        self.io.say(&format!("{}: {message}", path.display()))?;

        if self.all_files || self.file_scope == FileScope::ApplyRest {
            return Ok(Decision::Apply);
        }

        let input = self.io.ask(PROMPT)?;
        match parse_answer(&input) {
            Answer::Yes => Ok(Decision::Apply),
            Answer::File => {
                self.file_scope = FileScope::ApplyRest;
                Ok(Decision::Apply)
            }
            Answer::All => {
                self.all_files = true;
                Ok(Decision::Apply)
            }
            Answer::Skip => {
                self.file_scope = FileScope::SkipRest;
                Ok(Decision::SkipFile)
            }
            Answer::Quit => Ok(Decision::AbortRun),
            Answer::No => Ok(Decision::Decline),
        }
    }
}

/// Scripted IO for tests: canned answers in, transcript out.
#[cfg(test)]
pub(crate) mod testing {
    use super::RepairIo;
    use anyhow::Result;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Default)]
    pub(crate) struct ScriptedIo {
        pub answers: VecDeque<String>,
        pub transcript: Rc<RefCell<Vec<String>>>,
        pub prompts: usize,
    }

    impl ScriptedIo {
        pub fn with_answers<const N: usize>(answers: [&str; N]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl RepairIo for ScriptedIo {
        fn say(&mut self, line: &str) -> Result<()> {
            self.transcript.borrow_mut().push(line.to_string());
            Ok(())
        }

        fn ask(&mut self, _prompt: &str) -> Result<String> {
            self.prompts += 1;
            Ok(self.answers.pop_front().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedIo;
    use super::{Answer, Decision, RepairSession, parse_answer};
    use std::path::Path;

    #[test]
    fn answers_accept_full_word_or_first_letter_any_case() {
        assert_eq!(parse_answer("yes"), Answer::Yes);
        assert_eq!(parse_answer("Y"), Answer::Yes);
        assert_eq!(parse_answer("FILE"), Answer::File);
        assert_eq!(parse_answer("s"), Answer::Skip);
        assert_eq!(parse_answer("All"), Answer::All);
        assert_eq!(parse_answer("q"), Answer::Quit);
        assert_eq!(parse_answer(""), Answer::No);
        assert_eq!(parse_answer("whatever"), Answer::No);
    }

    #[test]
    fn all_answer_silences_every_later_prompt() {
        let mut io = ScriptedIo::with_answers(["all"]);
        let mut session = RepairSession::new(&mut io);

        let p = Path::new("un.md");
        assert_eq!(session.decide(p, "CR detected").unwrap(), Decision::Apply);
        assert_eq!(
            session.decide(p, "subject mismatch").unwrap(),
            Decision::Apply
        );

        session.begin_file();
        let q = Path::new("deux.md");
        assert_eq!(session.decide(q, "CR detected").unwrap(), Decision::Apply);
        assert_eq!(io.prompts, 1);
    }

    #[test]
    fn file_answer_covers_the_rest_of_this_file_only() {
        let mut io = ScriptedIo::with_answers(["file", "no"]);
        let mut session = RepairSession::new(&mut io);

        let p = Path::new("un.md");
        assert_eq!(session.decide(p, "a").unwrap(), Decision::Apply);
        assert_eq!(session.decide(p, "b").unwrap(), Decision::Apply);

        session.begin_file();
        let q = Path::new("deux.md");
        assert_eq!(session.decide(q, "c").unwrap(), Decision::Decline);
        assert_eq!(io.prompts, 2);
    }

    #[test]
    fn skip_answer_mutes_the_rest_of_the_file() {
        let mut io = ScriptedIo::with_answers(["skip", "yes"]);
        let transcript = io.transcript.clone();
        let mut session = RepairSession::new(&mut io);

        let p = Path::new("un.md");
        assert_eq!(session.decide(p, "a").unwrap(), Decision::SkipFile);
        assert_eq!(session.decide(p, "b").unwrap(), Decision::SkipFile);
        // The skipped repair is not even announced.
        assert_eq!(transcript.borrow().len(), 1);

        session.begin_file();
        let q = Path::new("deux.md");
        assert_eq!(session.decide(q, "c").unwrap(), Decision::Apply);
    }

    #[test]
    fn quit_aborts_the_run() {
        let mut io = ScriptedIo::with_answers(["quit"]);
        let mut session = RepairSession::new(&mut io);
        assert_eq!(
            session.decide(Path::new("un.md"), "a").unwrap(),
            Decision::AbortRun
        );
    }
}
