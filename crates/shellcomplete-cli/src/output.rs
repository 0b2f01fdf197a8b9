// Output formatting and styling

use colored::Colorize;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl OutputStyle {
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    pub fn prompt(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {} ", "?".yellow().bold(), msg)
        } else {
            format!("? {} ", msg)
        }
    }
}

/// Print a success message to stderr
pub fn print_success(msg: &str) {
    eprintln!("{}", OutputStyle::default().success(msg));
}

/// Print an error message to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}
