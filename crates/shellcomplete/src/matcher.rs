//! Literal prefix matching between a candidate and the word being typed.

use std::fmt;

/// Decides whether a candidate completes what the user has typed so far.
pub trait Matcher {
    fn matches(&self, typed: &str) -> bool;
}

/// A candidate string matched by literal prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix {
    candidate: String,
}

impl Prefix {
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
        }
    }

    /// The full candidate, never the typed prefix.
    pub fn as_str(&self) -> &str {
        &self.candidate
    }

    pub fn into_string(self) -> String {
        self.candidate
    }
}

impl Matcher for Prefix {
    fn matches(&self, typed: &str) -> bool {
        self.candidate.starts_with(typed)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.candidate)
    }
}

/// Prefix match for file system paths.
///
/// A leading `./` is ignored on both sides, `./` itself completes an empty
/// word or `.`, and a lone `.` matches every dot-file.
pub fn match_file(file: &str, typed: &str) -> bool {
    if file == "./" && (typed.is_empty() || typed == ".") {
        return true;
    }
    if typed == "." && file.starts_with('.') {
        return true;
    }
    let file = file.strip_prefix("./").unwrap_or(file);
    let typed = typed.strip_prefix("./").unwrap_or(typed);
    file.starts_with(typed)
}
