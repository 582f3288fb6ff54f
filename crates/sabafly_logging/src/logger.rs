//! The rotating log sink.

use crate::{Level, LoggingConfig};
use crate::archive::{compress_into, create_archive};
use chrono::{DateTime, Local, NaiveDate};
use sabafly_error::{LoggingError, LoggingErrorKind, SabaflyResult};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, instrument};

/// State of the open live file, guarded by the logger's mutex.
#[derive(Debug)]
struct LiveFile {
    /// Open in read + append mode
    file: File,
    /// Creation or last rollover time
    created: DateTime<Local>,
    /// Lines written since `created`
    lines: usize,
    /// Next archive sequence number to try
    sequence: u32,
    /// Calendar day of the last rollover
    last_rollover: Option<NaiveDate>,
}

/// Single-writer log sink with size- and age-triggered rollover.
///
/// Every write and rollover runs entirely under one mutex, so the logger can
/// be shared between threads through an `Arc`. Two loggers must not target
/// the same file.
///
/// Filesystem failures are returned to the caller as they happen and are
/// never retried. A failed call may have lost its line; the logger keeps
/// whatever state the failure left behind.
///
/// Nothing here emits `tracing` events while the lock is held, because a
/// [`RotatingLayer`](crate::RotatingLayer) may be calling in from inside the
/// subscriber.
#[derive(Debug)]
pub struct RotatingLogger {
    config: LoggingConfig,
    path: PathBuf,
    state: Mutex<LiveFile>,
}

impl RotatingLogger {
    /// Open the live file, creating its directory and the file if needed.
    ///
    /// Existing content is kept and its lines count towards rotation. If the
    /// file is already due for rotation it is archived before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created, opened or
    /// read, or if the initial rollover fails.
    #[instrument(skip(config), fields(path = %config.file_path().display()))]
    pub fn new(config: LoggingConfig) -> SabaflyResult<Self> {
        let dir = config.log_path();
        fs::create_dir_all(dir).map_err(|e| {
            LoggingError::new(LoggingErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let path = config.file_path();
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| io_error(LoggingErrorKind::Open, &path, e))?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| io_error(LoggingErrorKind::Read, &path, e))?;
        let lines = contents.iter().filter(|&&byte| byte == b'\n').count();
        let created = modified_time(&file, &path)?;

        let logger = Self {
            config,
            path,
            state: Mutex::new(LiveFile {
                file,
                created,
                lines,
                sequence: 0,
                last_rollover: None,
            }),
        };

        let rotated = {
            let mut state = logger.lock()?;
            let now = Local::now();
            if logger.should_rotate(&state, now) {
                Some(logger.rollover(&mut state, now)?)
            } else {
                None
            }
        };

        match rotated {
            Some(archive) => info!(lines, archive = %archive.display(), "Archived existing log file"),
            None => info!(lines, "Opened log file"),
        }
        Ok(logger)
    }

    /// Append one line, rotating first if the live file is due.
    ///
    /// The line is written as `[HH:MM:SS] [LEVEL]: message` using the local
    /// wall-clock time of `timestamp`. The message is written verbatim; an
    /// embedded newline splits it across lines.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation or the write fails.
    pub fn log(&self, level: Level, message: &str, timestamp: DateTime<Local>) -> SabaflyResult<()> {
        let mut state = self.lock()?;
        if self.should_rotate(&state, timestamp) {
            self.rollover(&mut state, timestamp)?;
        }

        let line = format!("[{}] [{}]: {}\n", timestamp.format("%H:%M:%S"), level, message);
        state
            .file
            .write_all(line.as_bytes())
            .map_err(|e| io_error(LoggingErrorKind::Write, &self.path, e))?;
        state.lines += 1;
        Ok(())
    }

    /// Archive the live file now, whatever its size or age.
    ///
    /// Returns the path of the new archive.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the rollover fails.
    pub fn rotate(&self) -> SabaflyResult<PathBuf> {
        let mut state = self.lock()?;
        Ok(self.rollover(&mut state, Local::now())?)
    }

    /// Lines in the live file since it was created or last rotated.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn line_count(&self) -> SabaflyResult<usize> {
        Ok(self.lock()?.lines)
    }

    /// Path of the live file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configuration this logger was opened with.
    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Flush the live file to disk and close it.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the sync fails.
    pub fn close(self) -> SabaflyResult<()> {
        let state = self
            .state
            .into_inner()
            .map_err(|e| LoggingError::new(LoggingErrorKind::LockPoisoned(e.to_string())))?;
        state
            .file
            .sync_all()
            .map_err(|e| io_error(LoggingErrorKind::Sync, &self.path, e))?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, LiveFile>, LoggingError> {
        self.state
            .lock()
            .map_err(|e| LoggingError::new(LoggingErrorKind::LockPoisoned(e.to_string())))
    }

    fn should_rotate(&self, state: &LiveFile, now: DateTime<Local>) -> bool {
        if state.lines > *self.config.max_lines() {
            return true;
        }
        match self.config.max_age() {
            Some(max_age) if state.lines > 0 => {
                // a clock that went backwards counts as zero age
                let age = now
                    .signed_duration_since(state.created)
                    .to_std()
                    .unwrap_or_default();
                age > max_age
            }
            _ => false,
        }
    }

    /// Move the live file's contents into a new archive and empty it.
    fn rollover(&self, state: &mut LiveFile, now: DateTime<Local>) -> Result<PathBuf, LoggingError> {
        let today = now.date_naive();
        if state.last_rollover != Some(today) {
            state.sequence = 0;
        }

        state
            .file
            .sync_all()
            .map_err(|e| io_error(LoggingErrorKind::Sync, &self.path, e))?;
        let modified = modified_time(&state.file, &self.path)?;

        let (archive_path, archive) = create_archive(
            self.config.log_path(),
            self.config.log_name(),
            modified.date_naive(),
            &mut state.sequence,
        )?;

        state
            .file
            .seek(SeekFrom::Start(0))
            .map_err(|e| io_error(LoggingErrorKind::Read, &self.path, e))?;
        compress_into(
            &mut state.file,
            archive,
            &archive_path,
            self.config.log_name(),
            modified,
        )?;

        state
            .file
            .set_len(0)
            .map_err(|e| io_error(LoggingErrorKind::Truncate, &self.path, e))?;
        state
            .file
            .sync_all()
            .map_err(|e| io_error(LoggingErrorKind::Sync, &self.path, e))?;

        state.lines = 0;
        state.created = now;
        state.last_rollover = Some(today);
        state.sequence += 1;
        Ok(archive_path)
    }
}

#[track_caller]
fn modified_time(file: &File, path: &Path) -> Result<DateTime<Local>, LoggingError> {
    file.metadata()
        .and_then(|metadata| metadata.modified())
        .map(DateTime::<Local>::from)
        .map_err(|e| io_error(LoggingErrorKind::Metadata, path, e))
}

#[track_caller]
fn io_error(kind: fn(String) -> LoggingErrorKind, path: &Path, e: std::io::Error) -> LoggingError {
    LoggingError::new(kind(format!("{}: {}", path.display(), e)))
}
