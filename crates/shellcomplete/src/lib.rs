//! shellcomplete
//!
//! Shell command completion driven by a declared command tree.
//!
//! # Architecture
//!
//! 1. **Args**: the raw line is split on whitespace into completed words and
//!    the word under the cursor
//! 2. **Prediction**: the completed words are walked through the
//!    [`Command`] tree to collect raw candidates from sub-commands, flags and
//!    argument [`Predictor`]s
//! 3. **Filtering**: every raw candidate the typed word is a prefix of is
//!    handed back to the shell
//!
//! Around the engine sit a declarative tree loader ([`config`]), an
//! injectable debug side channel ([`debug`]) and rc-file installation of
//! the shell hook ([`install`]).
//!
//! # Example
//!
//! ```
//! use shellcomplete::{Command, Complete, PredictSet};
//!
//! let git = Command::new()
//!     .with_sub(
//!         "push",
//!         Command::new()
//!             .with_flag("--force")
//!             .with_flag_value("--repo", PredictSet::new(["origin", "upstream"])),
//!     )
//!     .with_flag("--version");
//!
//! let complete = Complete::new("git", git);
//! assert_eq!(complete.complete_line("git pu"), vec!["push"]);
//! assert_eq!(complete.complete_line("git push --repo o"), vec!["origin"]);
//! ```
pub mod args;
pub mod command;
pub mod config;
pub mod debug;
pub mod engine;
pub mod error;
pub mod install;
pub mod matcher;
pub mod predictor;

pub use args::{Args, CommandLine};
pub use command::{Command, Commands, Flags, Resolution};
pub use config::{CommandSpec, PredictorSpec, TreeFormat, TreeLoader};
pub use debug::{DebugEvent, DebugSink, MemorySink, NullSink, TracingSink};
pub use engine::{complete, Complete, ENV_COMPLETE_LINE, ENV_COMPLETE_POINT, ENV_DEBUG};
pub use error::{CompletionError, Result};
pub use install::{shell_quote, Installer, Shell};
pub use matcher::{match_file, Matcher, Prefix};
pub use predictor::{
    PredictAnything, PredictDirs, PredictFiles, PredictFilesSet, PredictNothing, PredictOr,
    PredictSet, Predictor,
};
