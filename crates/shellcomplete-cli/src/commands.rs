// Command handlers

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputStyle};
use shellcomplete::{shell_quote, Command, Complete, Installer, TreeLoader, ENV_COMPLETE_LINE};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Load and build the command tree at `tree`.
pub fn load(tree: &Path) -> CliResult<Command> {
    Ok(TreeLoader::load_command(tree)?)
}

fn completer(tree: &Path) -> CliResult<Complete> {
    let name = tree
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Complete::new(name, load(tree)?))
}

/// Hook mode: complete the line the shell put in the environment.
pub fn complete(tree: &Path) -> CliResult<()> {
    if completer(tree)?.run() {
        Ok(())
    } else {
        Err(CliError::NotCompleting(ENV_COMPLETE_LINE.to_string()))
    }
}

/// Print the candidates for a literal line, one per line.
pub fn predict<W: Write>(tree: &Path, line: &str, out: &mut W) -> CliResult<()> {
    for candidate in completer(tree)?.complete_line(line) {
        writeln!(out, "{}", candidate)?;
    }
    Ok(())
}

/// The command the shell runs to complete: this binary in hook mode.
pub fn hook_command(tree: &Path) -> CliResult<String> {
    if !tree.is_file() {
        return Err(CliError::InvalidArgument {
            message: format!("command tree not found: {}", tree.display()),
        });
    }
    load(tree)?;
    let exe = std::env::current_exe()?;
    let tree = std::fs::canonicalize(tree)?;
    Ok(format!(
        "{} complete --tree {}",
        shell_quote(&exe.to_string_lossy()),
        shell_quote(&tree.to_string_lossy())
    ))
}

pub fn install<R: BufRead>(
    installer: &Installer,
    name: &str,
    bin: &str,
    yes: bool,
    input: &mut R,
) -> CliResult<Vec<PathBuf>> {
    if !yes && !confirm(&format!("Install completion for {}?", name), input)? {
        return Err(CliError::Cancelled);
    }

    let edited = installer.install(name, bin)?;
    for rc in &edited {
        output::print_success(&format!("Installed completion for {} in {}", name, rc.display()));
    }
    Ok(edited)
}

pub fn uninstall<R: BufRead>(
    installer: &Installer,
    name: &str,
    yes: bool,
    input: &mut R,
) -> CliResult<Vec<PathBuf>> {
    if !yes && !confirm(&format!("Uninstall completion for {}?", name), input)? {
        return Err(CliError::Cancelled);
    }

    let edited = installer.uninstall(name)?;
    for rc in &edited {
        output::print_success(&format!("Removed completion for {} from {}", name, rc.display()));
    }
    Ok(edited)
}

/// Ask a yes/no question on stderr; anything but y/yes is a no.
fn confirm<R: BufRead>(question: &str, input: &mut R) -> CliResult<bool> {
    eprint!("{}", OutputStyle::default().prompt(&format!("{} [y/N]", question)));
    std::io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
