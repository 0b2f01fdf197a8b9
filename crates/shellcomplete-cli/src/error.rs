use shellcomplete::CompletionError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Not running as a completion hook: {0} is not set")]
    NotCompleting(String),

    #[error("Cancelled by user")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'shellcomplete --help' for usage information.",
                    message
                )
            }
            CliError::NotCompleting(var) => {
                format!(
                    "{} is not set.\n\nThis command is meant to be run by the shell. Use 'shellcomplete install' to set it up, or 'shellcomplete predict' to try a line by hand.",
                    var
                )
            }
            CliError::Cancelled => "Cancelled.".to_string(),
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Completion(CompletionError::AlreadyInstalled { command, path }) => {
                format!(
                    "Completion for '{}' is already installed in {}.\n\nRun 'shellcomplete uninstall' first to replace it.",
                    command, path
                )
            }
            CliError::Completion(e @ CompletionError::YamlError(_))
            | CliError::Completion(e @ CompletionError::JsonError(_))
            | CliError::Completion(e @ CompletionError::InvalidTree(_))
            | CliError::Completion(e @ CompletionError::PatternError(_)) => {
                format!("{}\n\nCheck your command tree file.", e)
            }
            CliError::Completion(e) => e.to_string(),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_installed_suggests_uninstall() {
        let err = CliError::from(CompletionError::AlreadyInstalled {
            command: "git".to_string(),
            path: "/home/u/.bashrc".to_string(),
        });
        let msg = err.user_message();
        assert!(msg.contains("already installed in /home/u/.bashrc"));
        assert!(msg.contains("shellcomplete uninstall"));
    }

    #[test]
    fn test_tree_errors_point_at_tree_file() {
        let err = CliError::from(CompletionError::InvalidTree("flag name cannot be empty".into()));
        assert!(err.user_message().ends_with("Check your command tree file."));
    }
}
