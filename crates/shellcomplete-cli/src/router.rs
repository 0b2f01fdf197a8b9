// Command routing and dispatch

use crate::commands;
use crate::error::CliResult;
use crate::logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shellcomplete - complete any command from a declared command tree
#[derive(Parser, Debug)]
#[command(name = "shellcomplete")]
#[command(bin_name = "shellcomplete")]
#[command(about = "Complete any command from a YAML or JSON command tree")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Completion hook mode: read COMP_LINE and print candidates
    Complete {
        /// Command tree file (.yaml, .yml or .json)
        #[arg(long, value_name = "FILE")]
        tree: PathBuf,

        /// Words appended by the shell; the line is taken from COMP_LINE
        #[arg(
            value_name = "SHELL_ARGS",
            trailing_var_arg = true,
            allow_hyphen_values = true,
            hide = true
        )]
        shell_args: Vec<String>,
    },

    /// Print candidates for a literal command line
    Predict {
        /// Command tree file (.yaml, .yml or .json)
        #[arg(long, value_name = "FILE")]
        tree: PathBuf,

        /// Command line as the shell would report it, e.g. "git pu"
        #[arg(value_name = "LINE")]
        line: String,
    },

    /// Install the completion hook into the shell rc files
    Install {
        /// Command tree file (.yaml, .yml or .json)
        #[arg(long, value_name = "FILE")]
        tree: PathBuf,

        /// Name of the command to complete
        #[arg(long, value_name = "CMD")]
        name: String,

        /// Don't prompt for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Remove the completion hook from the shell rc files
    Uninstall {
        /// Name of the completed command
        #[arg(long, value_name = "CMD")]
        name: String,

        /// Don't prompt for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and execute the command
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();
        logging::init_logging(cli.verbose);
        Self::execute(&cli.command)
    }

    /// Execute a parsed command
    pub fn execute(command: &Commands) -> CliResult<()> {
        match command {
            Commands::Complete { tree, .. } => commands::complete(tree),
            Commands::Predict { tree, line } => {
                let stdout = std::io::stdout();
                commands::predict(tree, line, &mut stdout.lock())
            }
            Commands::Install { tree, name, yes } => {
                let bin = commands::hook_command(tree)?;
                let installer = shellcomplete::Installer::new()?;
                let stdin = std::io::stdin();
                commands::install(&installer, name, &bin, *yes, &mut stdin.lock())
                    .map(|_| ())
            }
            Commands::Uninstall { name, yes } => {
                let installer = shellcomplete::Installer::new()?;
                let stdin = std::io::stdin();
                commands::uninstall(&installer, name, *yes, &mut stdin.lock())
                    .map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_accepts_shell_words() {
        let cli = Cli::try_parse_from([
            "shellcomplete",
            "complete",
            "--tree",
            "git.yaml",
            "git",
            "--fo",
            "push",
        ])
        .unwrap();

        match cli.command {
            Commands::Complete { tree, shell_args } => {
                assert_eq!(tree, PathBuf::from("git.yaml"));
                assert_eq!(shell_args, vec!["git", "--fo", "push"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_install_flags() {
        let cli = Cli::try_parse_from([
            "shellcomplete",
            "install",
            "--tree",
            "git.yaml",
            "--name",
            "git",
            "-y",
        ])
        .unwrap();

        match cli.command {
            Commands::Install { name, yes, .. } => {
                assert_eq!(name, "git");
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_uninstall_needs_only_the_name() {
        let cli =
            Cli::try_parse_from(["shellcomplete", "uninstall", "--name", "git", "-y"]).unwrap();

        match cli.command {
            Commands::Uninstall { name, yes } => {
                assert_eq!(name, "git");
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_predict_requires_tree() {
        assert!(Cli::try_parse_from(["shellcomplete", "predict", "git pu"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
