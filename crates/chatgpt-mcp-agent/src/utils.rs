use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Name of the daily-rolled log file.
pub const LOG_FILE_NAME: &str = "chatgpt-mcp-agent.log";

/// `LOG_LEVEL` as a tracing level; unknown or unset values mean INFO.
pub fn log_level_from_env() -> Level {
    env::var("LOG_LEVEL")
        .map(|level| parse_log_level(&level))
        .unwrap_or(Level::INFO)
}

fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Directory for log files: `CHATGPT_MCP_LOG_DIR`, else the local data dir.
pub fn log_dir() -> PathBuf {
    if let Ok(custom_dir) = env::var("CHATGPT_MCP_LOG_DIR") {
        return PathBuf::from(custom_dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("chatgpt-mcp")
        .join("logs")
}

/// Filter shared by every layer: `RUST_LOG`, the base level, and quiet transport targets.
fn log_filter(level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("rmcp::transport=warn".parse()?)
        .add_directive("rmcp::service=error".parse()?))
}

/// Install the global subscriber: stderr plus a daily rolling file.
///
/// stdout carries the JSON-RPC stream, so nothing is ever logged there.
pub fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let log_level = log_level_from_env();
    let log_dir = log_dir();

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {e}", log_dir.display());
    }

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .build(&log_dir);

    let file_layer = match file_appender {
        Ok(appender) => Some(
            // File layer with timestamps
            tracing_subscriber::fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(log_filter(log_level)?),
        ),
        Err(e) => {
            eprintln!("Logging to stderr only, file appender unavailable: {e}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(
            // Console/stderr layer
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_filter(log_filter(log_level)?),
        )
        .with(file_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level("warn"), Level::WARN);
        assert_eq!(parse_log_level("error"), Level::ERROR);
        assert_eq!(parse_log_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_log_filter_parses() {
        assert!(log_filter(Level::DEBUG).is_ok());
    }
}
