// Logging setup
//
// stdout is the completion channel, so everything goes to stderr.

use shellcomplete::ENV_DEBUG;

/// Pick the log level from CLI flags and the environment.
pub fn log_level(verbose: bool, comp_debug: Option<&str>) -> tracing::Level {
    let debug_env = comp_debug.is_some_and(|v| !v.is_empty() && v != "0");
    if verbose || debug_env {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    }
}

/// Initialize the tracing subscriber
pub fn init_logging(verbose: bool) {
    let comp_debug = std::env::var(ENV_DEBUG).ok();
    let level = log_level(verbose, comp_debug.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, None), tracing::Level::WARN);
        assert_eq!(log_level(true, None), tracing::Level::DEBUG);
        assert_eq!(log_level(false, Some("1")), tracing::Level::DEBUG);
        assert_eq!(log_level(false, Some("0")), tracing::Level::WARN);
        assert_eq!(log_level(false, Some("")), tracing::Level::WARN);
    }
}
