//! Diagnostics backend for the `log` facade.
//!
//! Library code reports config discovery and policy decisions with
//! `log::debug!` and friends. [`Logger`] is the backend the `rpath` tool
//! installs to print those records on stderr, filtered by a [`LogLevel`]
//! chosen from `--verbose`/`--quiet` or `RPATH_LOG_MODE`.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable selecting the log level when no flag is given.
pub const LOG_MODE_ENV: &str = "RPATH_LOG_MODE";

/// How much diagnostic output reaches stderr.
///
/// # Examples
///
/// ```
/// use rpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Verbose);
/// assert_eq!(LogLevel::Verbose.filter(), log::LevelFilter::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Warnings and errors.
    Normal,
    /// Everything down to debug records, e.g. which config files were read.
    Verbose,
}

impl LogLevel {
    /// Parse `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error message for any other value.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log mode: {s} (expected quiet, normal or verbose)")),
        }
    }

    /// The `log` filter this level lets through.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

/// Stderr backend for the `log` facade.
///
/// # Examples
///
/// ```
/// use log::{Level, Log, Metadata};
/// use rpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let debug = Metadata::builder().level(Level::Debug).build();
/// assert!(!logger.enabled(&debug));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Create a backend that prints records allowed by `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The level this backend filters by.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Install as the global `log` backend and set the matching max level.
    ///
    /// # Errors
    ///
    /// Fails if a backend was already installed in this process.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.level.filter());
        Ok(())
    }

    fn line(record: &Record<'_>) -> String {
        format!("{}: {}", record.level(), record.args())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::line(record));
        }
    }

    fn flush(&self) {}
}

/// Pick the backend level: `--verbose` wins over `--quiet`, either wins
/// over a valid `RPATH_LOG_MODE`, and `Normal` is the fallback.
///
/// The returned logger is not installed; call [`Logger::install`].
///
/// # Examples
///
/// ```
/// use rpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| LogLevel::parse(&mode).ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
