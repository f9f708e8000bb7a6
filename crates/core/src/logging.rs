use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding where log files are written.
pub const LOG_DIR_ENV: &str = "WEAVER_LOG_DIR";

/// Directory holding the rolling log files: `$WEAVER_LOG_DIR` when set and non-empty,
/// otherwise `~/.weaver/logs`.
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from))
}

fn resolve_log_dir(overridden: Option<PathBuf>) -> PathBuf {
    match overridden {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".weaver/logs"),
    }
}

pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Cannot create log directory {}: {}", log_dir.display(), e);
    }

    // Roll daily, with the component name as the prefix
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_when_set() {
        let dir = PathBuf::from("/var/log/weaver");
        assert_eq!(resolve_log_dir(Some(dir.clone())), dir);
    }

    #[test]
    fn test_empty_override_falls_back_to_home() {
        let dir = resolve_log_dir(Some(PathBuf::new()));
        assert!(dir.ends_with(".weaver/logs"));
        assert_eq!(resolve_log_dir(None), dir);
    }
}
