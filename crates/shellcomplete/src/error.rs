use thiserror::Error;

/// Errors raised by the layers around the prediction engine.
///
/// Prediction itself never fails; these cover loading a command tree and
/// editing shell rc files.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid command tree: {0}")]
    InvalidTree(String),

    #[error("Install error: {0}")]
    InstallError(String),

    #[error("Completion for {command} is already installed in {path}")]
    AlreadyInstalled { command: String, path: String },

    #[error("Completion for {0} is not installed")]
    NotInstalled(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, CompletionError>;
