//! File-backed structured (JSON lines) logging.
//!
//! The dashboard owns the terminal, so log output never goes to stdout or
//! stderr. If the log file cannot be opened, events are discarded.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Default log file location, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/systemstats.log";

/// Maximum level for a `-v` count. Errors only by default.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Opens `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// One JSON object per event, without ANSI codes or targets.
pub fn json_subscriber(
    filter: EnvFilter,
    writer: BoxMakeWriter,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// Installs the global subscriber. `RUST_LOG` directives take precedence.
pub fn init_logging(verbose: u8, path: &Path) {
    let level = level_for_verbosity(verbose);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let writer = match open_log_file(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::sink),
    };

    let _ = json_subscriber(filter, writer).try_init();
}
