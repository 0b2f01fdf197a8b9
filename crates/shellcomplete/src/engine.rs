//! Completion runner.
//!
//! Ties a command tree to the shell: reads the line the shell hands over,
//! resolves raw candidates through the tree, applies the final prefix filter
//! against the word being typed and writes one candidate per line.

use crate::args::CommandLine;
use crate::command::Command;
use crate::debug::{DebugEvent, DebugSink, TracingSink};
use crate::matcher::{Matcher, Prefix};
use std::env;
use std::io::{self, Write};
use std::sync::Arc;

/// Variable holding the line being completed.
pub const ENV_COMPLETE_LINE: &str = "COMP_LINE";
/// Variable holding the cursor offset into the line.
pub const ENV_COMPLETE_POINT: &str = "COMP_POINT";
/// Variable enabling debug output on stderr.
pub const ENV_DEBUG: &str = "COMP_DEBUG";

/// Completion for a single named program.
pub struct Complete {
    name: String,
    command: Command,
    sink: Arc<dyn DebugSink>,
}

impl Complete {
    /// `name` must be the program name the shell completes for.
    pub fn new(name: impl Into<String>, command: Command) -> Self {
        Self {
            name: name.into(),
            command,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Candidates for a raw command line.
    pub fn complete_line(&self, line: &str) -> Vec<String> {
        self.sink.record(&DebugEvent::LineReceived {
            line: line.to_string(),
        });
        let line = CommandLine::parse(line);
        let candidates = complete(&self.command, &line, self.sink.as_ref());
        self.sink.record(&DebugEvent::Completion {
            candidates: candidates.clone(),
        });
        candidates
    }

    /// Complete from the environment and print to stdout.
    ///
    /// Returns `false` when the program was not invoked for completion.
    pub fn run(&self) -> bool {
        let line = env::var(ENV_COMPLETE_LINE).ok();
        let point = env::var(ENV_COMPLETE_POINT).ok();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.run_with(line.as_deref(), point.as_deref(), &mut out) {
            Ok(ran) => ran,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to write completion output");
                true
            }
        }
    }

    /// Like [`Complete::run`] with the line, cursor and output supplied.
    pub fn run_with<W: Write>(
        &self,
        line: Option<&str>,
        point: Option<&str>,
        out: &mut W,
    ) -> io::Result<bool> {
        let line = match line {
            Some(line) if !line.is_empty() => line,
            _ => return Ok(false),
        };

        let line = truncate_at_point(line, point);
        for candidate in self.complete_line(line) {
            writeln!(out, "{}", candidate)?;
        }
        out.flush()?;
        Ok(true)
    }
}

/// Resolve `line` through `command` and keep only candidates the word being
/// typed is a prefix of.
pub fn complete(command: &Command, line: &CommandLine, sink: &dyn DebugSink) -> Vec<String> {
    let args = line.args();
    let resolution = command.resolve(&args, sink);

    resolution
        .candidates
        .into_iter()
        .map(Prefix::new)
        .filter(|candidate| {
            let accepted = candidate.matches(args.being_typed);
            sink.record(&DebugEvent::CandidateFiltered {
                candidate: candidate.to_string(),
                accepted,
            });
            accepted
        })
        .map(Prefix::into_string)
        .collect()
}

/// Cut the line at the cursor when the shell reports a usable position.
fn truncate_at_point<'a>(line: &'a str, point: Option<&str>) -> &'a str {
    match point.and_then(|p| p.trim().parse::<usize>().ok()) {
        Some(point) if point <= line.len() && line.is_char_boundary(point) => &line[..point],
        _ => line,
    }
}
