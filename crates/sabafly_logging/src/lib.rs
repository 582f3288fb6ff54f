//! Rotating file logger for bot processes.
//!
//! [`RotatingLogger`] appends `[HH:MM:SS] [LEVEL]: message` lines to a live
//! file and, once the file holds too many lines or has grown too old, moves
//! its contents into a gzip archive named after the file's date and starts
//! over with an empty live file.
//!
//! # Rotation policy
//!
//! A write first rotates the live file when either
//! - it holds more than `max_lines` lines, or
//! - `max_age_secs` is set, it holds at least one line, and more than
//!   `max_age_secs` have passed since it was created or last rotated.
//!
//! The same check runs once when the logger is opened on an existing file.
//!
//! # Archives
//!
//! Archives live next to the live file as `<stem>-<YYYY-MM-DD>-<seq>.gz`
//! (just `<YYYY-MM-DD>-<seq>.gz` for the default `latest.log`). The sequence
//! number restarts at 0 each day and is bumped past any file that already
//! exists. The gzip header records the live file's name and modification time.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use sabafly_logging::{Level, LoggingConfig, RotatingLogger};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LoggingConfig::default().with_max_lines(1000);
//! let logger = RotatingLogger::new(config)?;
//! logger.log(Level::Info, "bot started", Local::now())?;
//! logger.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! Use [`init_logging`] or [`RotatingLayer`] to feed the logger from `tracing`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod config;
mod layer;
mod level;
mod logger;

pub use archive::{DEFAULT_LOG_NAME, archive_file_name};
pub use config::LoggingConfig;
pub use layer::{RotatingLayer, init_logging, init_logging_with_level};
pub use level::Level;
pub use logger::RotatingLogger;
pub use sabafly_error::{LoggingError, LoggingErrorKind};
