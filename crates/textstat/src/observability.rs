//! Logging and tracing initialization.
//!
//! Console logging goes to stderr so stdout stays clean for command
//! output and piping. When a log directory is configured, a daily-rolled
//! file layer is added alongside; the returned guard must be held for
//! the process lifetime so buffered log lines flush on exit.

use anyhow::Context;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each
/// `-v` steps the configured level up (info → debug → trace).
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match (config_level, verbose) {
            (level, 0) => level,
            ("debug" | "trace", _) | (_, 2..) => "trace",
            (_, 1) => "debug",
        }
    };

    EnvFilter::new(level)
}

/// Initialize the global subscriber.
///
/// Returns the appender guard when file logging is active; `None` for
/// stderr-only logging.
pub fn init_observability(
    log_dir: Option<&Utf8Path>,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir.as_std_path())
                .with_context(|| format!("failed to create log directory {dir}"))?;
            let appender = tracing_appender::rolling::daily(dir.as_std_path(), "textstat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .context("failed to set global tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .context("failed to set global tracing subscriber")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        let filter = env_filter(true, 3, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_steps_up_from_config() {
        assert_eq!(env_filter(false, 0, "info").to_string(), "info");
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }

    #[test]
    fn debug_config_with_any_verbose_goes_to_trace() {
        assert_eq!(env_filter(false, 1, "debug").to_string(), "trace");
    }
}
