// Logging setup plus conditional macros that are only active in debug builds

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

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

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Used while the terminal UI owns the screen.
    File(PathBuf),
}

/// Log file under the user's cache directory, if one exists.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("rootword").join("rootword.log"))
}

/// Installs the global logger. `RUST_LOG` takes precedence over `verbose`.
///
/// Falls back to stderr when the log file can't be created. Calling this
/// twice is harmless; the second call is ignored.
pub fn init_logging(verbose: bool, target: &LogTarget) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let LogTarget::File(path) = target {
        match open_log_file(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Could not open log file '{}': {e}", path.display()),
        }
    }

    if builder.try_init().is_ok() {
        log::debug!("Logging initialized ({target:?})");
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}
