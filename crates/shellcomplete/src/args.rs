//! Token stream derived from a raw command line.
//!
//! [`CommandLine`] owns the tokens; [`Args`] is a borrowed view over them.
//! Descending into a sub-command produces a narrower view with
//! [`Args::from`] instead of mutating anything, so tokens that were already
//! consumed can never be looked at again.

/// An owned, whitespace-tokenized command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    completed: Vec<String>,
    all: Vec<String>,
    being_typed: String,
}

impl CommandLine {
    /// Tokenize `line` on whitespace.
    ///
    /// The first word is the program name and is not part of the stream.
    /// The last word is the one under the cursor; it is empty when the line
    /// ends in whitespace. Runs of whitespace never produce empty completed
    /// tokens.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split(char::is_whitespace);
        let program = words.next().unwrap_or_default().to_string();
        let rest: Vec<&str> = words.collect();

        let (being_typed, completed) = match rest.split_last() {
            Some((last, completed)) => (
                last.to_string(),
                completed
                    .iter()
                    .filter(|w| !w.is_empty())
                    .map(|w| w.to_string())
                    .collect::<Vec<_>>(),
            ),
            None => (String::new(), Vec::new()),
        };

        let mut all = completed.clone();
        all.push(being_typed.clone());

        Self {
            program,
            completed,
            all,
            being_typed,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The full view over this line, rooted at the top-level command.
    pub fn args(&self) -> Args<'_> {
        Args {
            all: &self.all,
            completed: &self.completed,
            last_completed: self.completed.last().map(String::as_str).unwrap_or(""),
            being_typed: &self.being_typed,
        }
    }
}

/// Read-only view of the token stream at one level of the command tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args<'a> {
    /// Every word after the program name, including the one being typed.
    pub all: &'a [String],
    /// Fully typed words, in order.
    pub completed: &'a [String],
    /// The completed word right before the cursor, or empty.
    pub last_completed: &'a str,
    /// The partial word under the cursor.
    pub being_typed: &'a str,
}

impl<'a> Args<'a> {
    /// View of the stream after the completed token at index `i`.
    ///
    /// `last_completed` and `being_typed` are properties of the whole line
    /// and carry over unchanged.
    pub fn from(&self, i: usize) -> Args<'a> {
        let skip_all = (i + 1).min(self.all.len());
        let skip_completed = (i + 1).min(self.completed.len());
        Args {
            all: &self.all[skip_all..],
            completed: &self.completed[skip_completed..],
            last_completed: self.last_completed,
            being_typed: self.being_typed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_trailing_space() {
        let line = CommandLine::parse("git push ");
        let args = line.args();
        assert_eq!(line.program(), "git");
        assert_eq!(args.completed, ["push"]);
        assert_eq!(args.last_completed, "push");
        assert_eq!(args.being_typed, "");
        assert_eq!(args.all, ["push", ""]);
    }

    #[test]
    fn test_parse_partial_word() {
        let line = CommandLine::parse("git push --f");
        let args = line.args();
        assert_eq!(args.completed, ["push"]);
        assert_eq!(args.last_completed, "push");
        assert_eq!(args.being_typed, "--f");
    }

    #[test]
    fn test_parse_program_only() {
        let line = CommandLine::parse("git");
        let args = line.args();
        assert!(args.completed.is_empty());
        assert_eq!(args.last_completed, "");
        assert_eq!(args.being_typed, "");
    }

    #[test]
    fn test_parse_empty_line() {
        let line = CommandLine::parse("");
        assert_eq!(line.program(), "");
        assert!(line.args().completed.is_empty());
    }

    #[test]
    fn test_parse_collapses_repeated_whitespace() {
        let line = CommandLine::parse("git  remote\t add x");
        let args = line.args();
        assert_eq!(args.completed, ["remote", "add"]);
        assert_eq!(args.being_typed, "x");
    }

    #[test]
    fn test_from_drops_matched_prefix() {
        let line = CommandLine::parse("git -v remote add o");
        let args = line.args();
        let sub = args.from(1);
        assert_eq!(sub.completed, ["add"]);
        assert_eq!(sub.all, ["add", "o"]);
        assert_eq!(sub.last_completed, "add");
        assert_eq!(sub.being_typed, "o");
    }

    #[test]
    fn test_from_past_end_is_empty() {
        let line = CommandLine::parse("git remote ");
        let sub = line.args().from(5);
        assert!(sub.completed.is_empty());
        assert!(sub.all.is_empty());
    }

}
