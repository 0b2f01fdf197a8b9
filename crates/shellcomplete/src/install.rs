// Shell hook installation
//
// Wires a completion command into the rc file of every supported shell the
// user has, and removes it again.

use crate::error::{CompletionError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Shells whose rc file can carry the completion hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    pub fn all() -> [Shell; 2] {
        [Shell::Bash, Shell::Zsh]
    }

    /// rc file name relative to the home directory
    pub fn rc_file(&self) -> &'static str {
        match self {
            Shell::Bash => ".bashrc",
            Shell::Zsh => ".zshrc",
        }
    }

    /// Lines that must appear once before any hook.
    fn setup_lines(&self) -> &'static [&'static str] {
        match self {
            Shell::Bash => &[],
            Shell::Zsh => &["autoload -U +X bashcompinit && bashcompinit"],
        }
    }

    /// The `complete` line that runs `bin` to complete `cmd`.
    ///
    /// `bin` is a shell command line in its own right; it is quoted as one
    /// word for `complete -C`.
    pub fn hook_line(&self, cmd: &str, bin: &str) -> String {
        format!("{}{} {}", self.hook_prefix(), shell_quote(bin), cmd)
    }

    fn hook_prefix(&self) -> &'static str {
        match self {
            Shell::Bash => "complete -C ",
            Shell::Zsh => "complete -o nospace -C ",
        }
    }

    /// Whether `line` is a hook this shell would write for `cmd`, whatever
    /// command it runs.
    pub fn is_hook_for(&self, line: &str, cmd: &str) -> bool {
        let line = line.trim();
        line.starts_with(self.hook_prefix())
            && line
                .strip_suffix(cmd)
                .map_or(false, |rest| rest.ends_with(' '))
    }
}

/// Quote `word` for a POSIX shell when it holds anything but plain path
/// characters.
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+=:,@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Edits shell rc files under a home directory.
#[derive(Debug, Clone)]
pub struct Installer {
    home: PathBuf,
}

impl Installer {
    /// Installer for the current user's home directory.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            CompletionError::InstallError("Could not determine home directory".to_string())
        })?;
        Ok(Self::with_home(home))
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Shells whose rc file exists.
    pub fn detected(&self) -> Vec<(Shell, PathBuf)> {
        Shell::all()
            .into_iter()
            .map(|shell| (shell, self.home.join(shell.rc_file())))
            .filter(|(_, rc)| rc.is_file())
            .collect()
    }

    /// Whether any detected rc file has a completion hook for `cmd`.
    pub fn is_installed(&self, cmd: &str) -> Result<bool> {
        for (shell, rc) in self.detected() {
            if has_hook(&rc, shell, cmd)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Append the hook to every detected rc file; returns the files edited.
    ///
    /// Nothing is written when any rc file already has a hook for `cmd`.
    pub fn install(&self, cmd: &str, bin: &str) -> Result<Vec<PathBuf>> {
        let detected = self.detected();
        if detected.is_empty() {
            return Err(CompletionError::InstallError(format!(
                "No shell rc file found in {}",
                self.home.display()
            )));
        }

        for (shell, rc) in &detected {
            if has_hook(rc, *shell, cmd)? {
                return Err(CompletionError::AlreadyInstalled {
                    command: cmd.to_string(),
                    path: rc.display().to_string(),
                });
            }
        }

        let mut edited = Vec::new();
        for (shell, rc) in detected {
            let mut content = fs::read_to_string(&rc)?;
            let eol = line_ending(&content);
            if !content.is_empty() && !content.ends_with('\n') {
                content.push_str(eol);
            }
            for setup in shell.setup_lines() {
                if !content.lines().any(|l| l.trim() == *setup) {
                    content.push_str(setup);
                    content.push_str(eol);
                }
            }
            content.push_str(&shell.hook_line(cmd, bin));
            content.push_str(eol);
            fs::write(&rc, content)?;
            tracing::info!(rc = %rc.display(), cmd, "Installed completion hook");
            edited.push(rc);
        }

        Ok(edited)
    }

    /// Remove the hook for `cmd` from every rc file that has one; returns the
    /// files edited.
    ///
    /// Shell setup lines are left in place since other hooks may need them.
    /// Line endings of the remaining lines are kept as they were.
    pub fn uninstall(&self, cmd: &str) -> Result<Vec<PathBuf>> {
        let mut edited = Vec::new();

        for (shell, rc) in self.detected() {
            let content = fs::read_to_string(&rc)?;
            if !content.lines().any(|l| shell.is_hook_for(l, cmd)) {
                continue;
            }

            let kept: String = content
                .split_inclusive('\n')
                .filter(|l| !shell.is_hook_for(l, cmd))
                .collect();
            fs::write(&rc, kept)?;
            tracing::info!(rc = %rc.display(), cmd, "Removed completion hook");
            edited.push(rc);
        }

        if edited.is_empty() {
            return Err(CompletionError::NotInstalled(cmd.to_string()));
        }
        Ok(edited)
    }
}

fn has_hook(path: &Path, shell: Shell, cmd: &str) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().any(|l| shell.is_hook_for(l, cmd)))
}

fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}
