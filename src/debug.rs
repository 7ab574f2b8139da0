// Logging setup for pong-bench
// Interactive modes log to a file so output never lands on the terminal UI

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

/// Where log events go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr; stdout stays reserved for benchmark results
    Stderr,
    /// [`log_file_path`], truncated at startup
    File,
}

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("pong-bench-debug.log")
}

/// Install the global tracing subscriber.
///
/// `--debug` raises the level from WARN to DEBUG. Returns `Ok(false)` when a
/// subscriber was already installed and this call left it in place.
pub fn init(enabled: bool, target: LogTarget) -> io::Result<bool> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let level = if enabled { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(log_file_path())?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };

    match installed {
        Ok(()) => Ok(true),
        Err(e) => {
            eprintln!("Warning: logging not installed: {}", e);
            Ok(false)
        }
    }
}
