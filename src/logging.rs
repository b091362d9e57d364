// Logger setup plus a trace macro that is compiled out of release builds.

use crate::wordbank::DATA_DIR_NAME;
use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "hiphop-hangman.log";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// A file the user asked for. Failing to create it is an error.
    File(PathBuf),
    /// The default file while the TUI owns the terminal. Records are dropped
    /// if it cannot be created.
    SessionFile(PathBuf),
    Discard,
}

/// `<data dir>/hiphop-hangman/hiphop-hangman.log`, if the platform has a
/// data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}

/// An explicit `log_file` always wins. Otherwise the TUI never logs to
/// stderr, since raw mode and the alternate screen would show the records
/// over the frame.
pub fn choose_output(log_file: Option<&Path>, tui: bool) -> LogOutput {
    match (log_file, tui) {
        (Some(path), _) => LogOutput::File(path.to_path_buf()),
        (None, false) => LogOutput::Stderr,
        (None, true) => default_log_path().map_or(LogOutput::Discard, LogOutput::SessionFile),
    }
}

fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn target_for(output: &LogOutput) -> io::Result<Target> {
    let target = match output {
        LogOutput::Stderr => Target::Stderr,
        LogOutput::File(path) => Target::Pipe(Box::new(create_log_file(path)?)),
        LogOutput::SessionFile(path) => match create_log_file(path) {
            Ok(file) => Target::Pipe(Box::new(file)),
            Err(_) => Target::Pipe(Box::new(io::sink())),
        },
        LogOutput::Discard => Target::Pipe(Box::new(io::sink())),
    };
    Ok(target)
}

/// Default filter for a `-v` count. `RUST_LOG` takes precedence.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global logger writing to `output`. Calling this twice is an
/// error from the `log` crate, reported as `io::ErrorKind::AlreadyExists`.
pub fn init(verbosity: u8, output: &LogOutput) -> io::Result<()> {
    let env = Env::default().default_filter_or(level_for_verbosity(verbosity));
    let mut builder = Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.target(target_for(output)?);
    builder
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}
