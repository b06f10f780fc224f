use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LEVEL: &str = "warn";

/// Where log lines go.
pub enum LogSink<'a> {
    Stderr,
    /// Append to a file; used while the dashboard owns the terminal
    File(&'a Path),
    Discard,
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: &str, sink: LogSink<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match sink {
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init()?;
        }
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()?;
        }
        LogSink::Discard => {}
    }

    Ok(())
}

/// `--log-level` beats the config file, which beats the default.
pub fn resolve_level(cli_level: Option<String>, config_level: Option<&str>) -> String {
    cli_level
        .or_else(|| config_level.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_precedence() {
        assert_eq!(
            resolve_level(Some("debug".to_string()), Some("info")),
            "debug"
        );
        assert_eq!(resolve_level(None, Some("info")), "info");
        assert_eq!(resolve_level(None, None), DEFAULT_LEVEL);
    }
}
