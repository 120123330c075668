use crate::sink::FanoutLayer;
use anyhow::Context;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    /// Also write JSON events to this file.
    pub log_file: Option<PathBuf>,

    /// Print events to stderr. Off while a log view owns the terminal, since
    /// the view already shows them.
    pub console: bool,
}

/// Initialize the process-wide subscriber.
///
/// - `RUST_LOG` filtering, defaulting to "info"
/// - every event is offered to the installed log views through [`FanoutLayer`]
/// - optional stderr and JSON file output
///
/// Keep the returned guard alive for as long as the file should be written.
pub fn init_logging(options: &LoggingOptions) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console = options
        .console
        .then(|| fmt::layer().with_writer(io::stderr).with_target(true));

    let (file, guard) = match &options.log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(FanoutLayer)
        .with(console)
        .with(file)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_writer(
    path: &std::path::Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => std::path::Path::new("."),
    };
    let name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    Ok(tracing_appender::non_blocking(appender))
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Raw
    }
}

/// How the view draws on stdout: colored when it is a terminal, plain text
/// when piped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Raw,
    Pretty,
}

impl LogMode {
    pub fn colors(self) -> bool {
        matches!(self, LogMode::Pretty)
    }
}
