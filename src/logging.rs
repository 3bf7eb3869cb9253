//! Tracing subscriber setup

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LogConfig;

/// Install the global tracing subscriber.
///
/// RUST_LOG takes precedence over the configured level. When a log file is
/// configured the returned guard must be kept alive until exit so buffered
/// lines are flushed.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), &config.level);

    let (writer, guard) = match &config.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            (writer, Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.file.is_none());

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!(e))?;

    Ok(guard)
}

fn file_writer(path: &Path) -> anyhow::Result<(BoxMakeWriter, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("invalid log file path {:?}", path))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {:?}", dir))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    Ok((BoxMakeWriter::new(writer), guard))
}

fn build_filter(rust_log: Option<String>, level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}
