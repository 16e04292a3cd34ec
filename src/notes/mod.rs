pub mod check;
pub mod config;
pub mod header;
pub mod heal;
pub mod ignore;
pub mod name;
pub mod note;
pub mod session;
pub mod tag;
pub mod tally;
pub mod visit;
pub mod walk;

/// Header field holding the note's subject line.
pub const SUBJECT_FIELD: &str = "Sujet";
/// Header field holding the whitespace-separated tag list.
pub const TAG_FIELD: &str = "Étiquettes";
