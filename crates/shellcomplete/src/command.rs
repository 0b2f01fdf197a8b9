//! Command tree and the recursive prediction walk over it.
//!
//! A [`Command`] declares its sub-commands, its flags (each with an optional
//! value predictor) and an optional predictor for free arguments. Prediction
//! walks the completed words through the tree:
//!
//! 1. If the previous word is a flag that takes a value, only that flag's
//!    predictor is consulted and nothing else is offered.
//! 2. Otherwise the first completed word naming a sub-command selects it and
//!    the walk continues there with the words after it.
//! 3. Each level then adds its sub-command names (only when no sub-command
//!    was selected), its flag names and its free-argument candidates.
//!
//! Sub-command and flag names are pre-filtered against the word being typed
//! while merging; the authoritative filter runs once over the final list in
//! [`crate::engine`].

use crate::args::Args;
use crate::debug::{DebugEvent, DebugSink, TracingSink};
use crate::matcher::{Matcher, Prefix};
use crate::predictor::Predictor;
use std::collections::HashMap;
use std::fmt;

/// Sub-commands keyed by name.
pub type Commands = HashMap<String, Command>;

/// Flags keyed by name; `None` marks a flag that takes no value.
pub type Flags = HashMap<String, Option<Box<dyn Predictor>>>;

/// One command or sub-command of the tree.
#[derive(Default)]
pub struct Command {
    pub sub: Commands,
    pub flags: Flags,
    pub args: Option<Box<dyn Predictor>>,
}

/// Raw candidates from one level of the walk.
///
/// `exclusive` is set when a flag value position was reached and no other
/// source may contribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub candidates: Vec<String>,
    pub exclusive: bool,
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sub(mut self, name: impl Into<String>, command: Command) -> Self {
        self.sub.insert(name.into(), command);
        self
    }

    /// Add a flag that takes no value.
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.flags.insert(name.into(), None);
        self
    }

    /// Add a flag whose value is predicted by `predictor`.
    ///
    /// With [`PredictNothing`](crate::PredictNothing) the flag takes no value.
    pub fn with_flag_value(
        mut self,
        name: impl Into<String>,
        predictor: impl Predictor + 'static,
    ) -> Self {
        self.flags.insert(name.into(), Some(Box::new(predictor)));
        self
    }

    pub fn with_args(mut self, predictor: impl Predictor + 'static) -> Self {
        self.args = Some(Box::new(predictor));
        self
    }

    /// Every candidate that may follow the completed words, before the final
    /// filter against the word being typed.
    pub fn predict(&self, args: &Args<'_>) -> Vec<String> {
        self.resolve(args, &TracingSink).candidates
    }

    /// Walk the tree for `args`, reporting decisions to `sink`.
    pub fn resolve(&self, args: &Args<'_>, sink: &dyn DebugSink) -> Resolution {
        if let Some(Some(predictor)) = self.flags.get(args.last_completed) {
            if predictor.takes_value() {
                sink.record(&DebugEvent::FlagValue {
                    flag: args.last_completed.to_string(),
                });
                return Resolution {
                    candidates: predictor.predict(args),
                    exclusive: true,
                };
            }
        }

        let mut candidates = match self.search_sub(args, sink) {
            Some(found) if found.exclusive => return found,
            Some(found) => found.candidates,
            None => self.sub_commands(args.being_typed),
        };

        candidates.extend(self.flag_names(args.being_typed));

        if let Some(predictor) = &self.args {
            candidates.extend(predictor.predict(args));
        }

        Resolution {
            candidates,
            exclusive: false,
        }
    }

    /// Descend into the sub-command named by the earliest completed word.
    fn search_sub(&self, args: &Args<'_>, sink: &dyn DebugSink) -> Option<Resolution> {
        args.completed.iter().enumerate().find_map(|(i, word)| {
            self.sub.get(word).map(|command| {
                sink.record(&DebugEvent::SubcommandMatched {
                    name: word.clone(),
                    index: i,
                });
                command.resolve(&args.from(i), sink)
            })
        })
    }

    fn sub_commands(&self, typed: &str) -> Vec<String> {
        prefix_matches(self.sub.keys(), typed)
    }

    fn flag_names(&self, typed: &str) -> Vec<String> {
        prefix_matches(self.flags.keys(), typed)
    }
}

fn prefix_matches<'a>(names: impl Iterator<Item = &'a String>, typed: &str) -> Vec<String> {
    names
        .map(Prefix::new)
        .filter(|m| m.matches(typed))
        .map(Prefix::into_string)
        .collect()
}

impl Predictor for Command {
    fn predict(&self, args: &Args<'_>) -> Vec<String> {
        self.resolve(args, &TracingSink).candidates
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags: Vec<(&String, bool)> = self
            .flags
            .iter()
            .map(|(name, predictor)| (name, predictor.is_some()))
            .collect();
        flags.sort();

        f.debug_struct("Command")
            .field("sub", &self.sub)
            .field("flags", &flags)
            .field("args", &self.args.is_some())
            .finish()
    }
}
