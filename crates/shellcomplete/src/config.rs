//! Declarative command trees loaded from YAML or JSON.
//!
//! ```yaml
//! sub:
//!   push:
//!     flags:
//!       --force: null
//!       --repo: { set: [origin, upstream] }
//! flags:
//!   --file: { files: "*.rs" }
//! args: { dirs: "*" }
//! ```

use crate::command::Command;
use crate::error::{CompletionError, Result};
use crate::predictor::{
    PredictAnything, PredictDirs, PredictFiles, PredictFilesSet, PredictOr, PredictSet,
    Predictor,
};
use serde::{Deserialize, Serialize};
use serde_yaml::with::singleton_map_recursive;
use std::collections::BTreeMap;
use std::path::Path;

/// Serialized form of a [`Command`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandSpec {
    pub sub: BTreeMap<String, CommandSpec>,
    pub flags: BTreeMap<String, Option<PredictorSpec>>,
    pub args: Option<PredictorSpec>,
}

/// Serialized form of the built-in predictors.
///
/// YAML trees write a predictor as a single-key map (`{ set: [a, b] }`) or,
/// for unit variants, a plain string (`anything`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorSpec {
    Set(Vec<String>),
    Files(String),
    Dirs(String),
    FilesSet(Vec<String>),
    Or(Vec<PredictorSpec>),
    Anything,
    Nothing,
}

impl PredictorSpec {
    /// `None` for [`PredictorSpec::Nothing`], which marks a value-less flag.
    pub fn build(&self) -> Result<Option<Box<dyn Predictor>>> {
        let predictor: Box<dyn Predictor> = match self {
            PredictorSpec::Nothing => return Ok(None),
            PredictorSpec::Anything => Box::new(PredictAnything),
            PredictorSpec::Set(options) => Box::new(PredictSet(options.clone())),
            PredictorSpec::Files(pattern) => Box::new(PredictFiles::new(pattern)?),
            PredictorSpec::Dirs(pattern) => Box::new(PredictDirs::new(pattern)?),
            PredictorSpec::FilesSet(files) => Box::new(PredictFilesSet(files.clone())),
            PredictorSpec::Or(specs) => {
                let mut or = PredictOr::new();
                for spec in specs {
                    if let Some(predictor) = spec.build()? {
                        or.0.push(predictor);
                    }
                }
                Box::new(or)
            }
        };
        Ok(Some(predictor))
    }
}

impl CommandSpec {
    /// Validate names and compile predictors into a command tree.
    pub fn build(&self) -> Result<Command> {
        let mut command = Command::new();

        for (name, spec) in &self.sub {
            validate_name("sub command", name)?;
            command.sub.insert(name.clone(), spec.build()?);
        }

        for (name, spec) in &self.flags {
            validate_name("flag", name)?;
            let predictor = match spec {
                Some(spec) => spec.build()?,
                None => None,
            };
            command.flags.insert(name.clone(), predictor);
        }

        if let Some(spec) = &self.args {
            command.args = spec.build()?;
        }

        Ok(command)
    }
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CompletionError::InvalidTree(format!(
            "{} name cannot be empty",
            kind
        )));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(CompletionError::InvalidTree(format!(
            "{} name cannot contain whitespace: {:?}",
            kind, name
        )));
    }
    Ok(())
}

/// Tree file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Yaml,
    Json,
}

impl TreeFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(TreeFormat::Yaml),
            Some("json") => Some(TreeFormat::Json),
            _ => None,
        }
    }
}

/// Loads command trees from files or strings.
pub struct TreeLoader;

impl TreeLoader {
    pub fn load_from_yaml(path: &Path) -> Result<CommandSpec> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, TreeFormat::Yaml)
    }

    pub fn load_from_json(path: &Path) -> Result<CommandSpec> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, TreeFormat::Json)
    }

    /// Parse and validate a tree. Validation compiles every predictor once.
    pub fn load_from_string(content: &str, format: TreeFormat) -> Result<CommandSpec> {
        let spec: CommandSpec = match format {
            TreeFormat::Yaml => singleton_map_recursive::deserialize(
                serde_yaml::Deserializer::from_str(content),
            )?,
            TreeFormat::Json => serde_json::from_str(content)?,
        };
        spec.build()?;
        Ok(spec)
    }

    /// Load a tree, choosing the format from the file extension.
    pub fn load_from_path(path: &Path) -> Result<CommandSpec> {
        match TreeFormat::from_path(path) {
            Some(TreeFormat::Yaml) => Self::load_from_yaml(path),
            Some(TreeFormat::Json) => Self::load_from_json(path),
            None => Err(CompletionError::ConfigError(format!(
                "Unsupported command tree format: {}",
                path.display()
            ))),
        }
    }

    /// Load a tree file and build the command it describes.
    pub fn load_command(path: &Path) -> Result<Command> {
        Self::load_from_path(path)?.build()
    }
}
