// src/util/log.rs

//! Logger Utility - Provides file-based logging for TUI applications
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::{LazyLock, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Directory the global logger writes into. Set once by [`init`].
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

const DEFAULT_LOG_DIR: &str = "./logs";

/// Global logger instance. `None` when the log directory could not be created.
pub static LOGGER: LazyLock<Option<Logger>> = LazyLock::new(|| {
    let dir = LOG_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
    Logger::new(&dir).ok()
});

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Logger that writes to separate files by severity
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl Logger {
    /// Create a new logger with the specified directory
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        DEBUG_ENABLED.get_or_init(|| {
            std::env::var("DEBUG").unwrap_or_default() == "true"
        });

        let log_dir = log_dir.to_path_buf();

        create_dir_all(&log_dir)?;

        // Start fresh each run
        let error_file = File::create(log_dir.join(LogLevel::Error.filename()))?;
        let warn_file = File::create(log_dir.join(LogLevel::Warn.filename()))?;
        let info_file = File::create(log_dir.join(LogLevel::Info.filename()))?;
        let debug_file = File::create(log_dir.join(LogLevel::Debug.filename()))?;

        Ok(Self {
            log_dir,
            error_file: Mutex::new(error_file),
            warn_file: Mutex::new(warn_file),
            info_file: Mutex::new(info_file),
            debug_file: Mutex::new(debug_file),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a log entry to the appropriate file
    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Point the global logger at `log_dir` and route `tracing` events to
/// `trace.log` in the same directory. Must run before the first log call.
pub fn init(log_dir: &Path) -> std::io::Result<()> {
    let _ = LOG_DIR.set(log_dir.to_path_buf());
    create_dir_all(log_dir)?;

    let trace_file = File::create(log_dir.join("trace.log"))?;
    let max_level = if std::env::var("DEBUG").unwrap_or_default() == "true" {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Ignore a second initialisation (tests, repeated runs in one process)
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(trace_file))
        .with_ansi(false)
        .with_max_level(max_level)
        .try_init();

    Ok(())
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            let message = format!($($arg)*);
            logger.error(&message);
        }
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            let message = format!($($arg)*);
            logger.warn(&message);
        }
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            let message = format!($($arg)*);
            logger.info(&message);
        }
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
                let message = format!($($arg)*);
                logger.debug(&message);
            }
        }
    }};
}
