//! Rotating log file error types.

/// Filesystem operation that failed inside the rotating logger.
///
/// Every variant carries the offending path and the underlying I/O message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LoggingErrorKind {
    /// Failed to create the log directory
    #[display("Failed to create log directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to open or create the live log file
    #[display("Failed to open log file: {}", _0)]
    Open(String),
    /// Failed to read the live log file
    #[display("Failed to read log file: {}", _0)]
    Read(String),
    /// Failed to append a line
    #[display("Failed to write log line: {}", _0)]
    Write(String),
    /// Failed to flush or sync a file to disk
    #[display("Failed to sync log file: {}", _0)]
    Sync(String),
    /// Failed to stat the live log file
    #[display("Failed to read log file metadata: {}", _0)]
    Metadata(String),
    /// Failed to create the archive file
    #[display("Failed to create archive: {}", _0)]
    ArchiveCreate(String),
    /// Failed while compressing into the archive
    #[display("Failed to compress archive: {}", _0)]
    Compress(String),
    /// Failed to truncate the live log file after archiving
    #[display("Failed to truncate log file: {}", _0)]
    Truncate(String),
    /// Another writer panicked while holding the logger lock
    #[display("Logger lock poisoned: {}", _0)]
    LockPoisoned(String),
    /// Failed to install the tracing subscriber
    #[display("Failed to install subscriber: {}", _0)]
    Subscriber(String),
}

/// Logging error with location tracking.
///
/// # Examples
///
/// ```
/// use sabafly_error::{LoggingError, LoggingErrorKind};
///
/// let err = LoggingError::new(LoggingErrorKind::Truncate("logs/latest.log".to_string()));
/// assert!(format!("{}", err).contains("truncate"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Logging Error: {} at line {} in {}", kind, line, file)]
pub struct LoggingError {
    /// The kind of error that occurred
    pub kind: LoggingErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LoggingError {
    /// Create a new logging error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LoggingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LoggingErrorKind {
        &self.kind
    }
}
