//! Archive naming and compression.

use chrono::{DateTime, Local, NaiveDate};
use flate2::{Compression, GzBuilder};
use sabafly_error::{LoggingError, LoggingErrorKind};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Live file name whose archives carry no name prefix.
pub const DEFAULT_LOG_NAME: &str = "latest.log";

/// Archive file name for a live file, date and sequence number.
///
/// ```
/// use chrono::NaiveDate;
/// use sabafly_logging::archive_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(archive_file_name("latest.log", date, 0), "2024-05-01-0.gz");
/// assert_eq!(archive_file_name("bot.log", date, 3), "bot-2024-05-01-3.gz");
/// ```
pub fn archive_file_name(log_name: &str, date: NaiveDate, sequence: u32) -> String {
    let stamp = format!("{}-{}.gz", date.format("%Y-%m-%d"), sequence);
    if log_name == DEFAULT_LOG_NAME {
        return stamp;
    }
    let stem = Path::new(log_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(log_name);
    format!("{stem}-{stamp}")
}

/// Create the first free archive in `dir`, advancing `sequence` past taken names.
pub(crate) fn create_archive(
    dir: &Path,
    log_name: &str,
    date: NaiveDate,
    sequence: &mut u32,
) -> Result<(PathBuf, File), LoggingError> {
    loop {
        let path = dir.join(archive_file_name(log_name, date, *sequence));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => *sequence += 1,
            Err(e) => {
                return Err(LoggingError::new(LoggingErrorKind::ArchiveCreate(format!(
                    "{}: {}",
                    path.display(),
                    e
                ))));
            }
        }
    }
}

/// Gzip everything readable from `source` into `archive` and sync it.
///
/// `source` must be positioned at the start of the data to archive.
pub(crate) fn compress_into(
    source: &mut File,
    archive: File,
    archive_path: &Path,
    original_name: &str,
    modified: DateTime<Local>,
) -> Result<(), LoggingError> {
    let compress_error = |e: io::Error| {
        LoggingError::new(LoggingErrorKind::Compress(format!(
            "{}: {}",
            archive_path.display(),
            e
        )))
    };

    // gzip stores a 32-bit Unix mtime; 0 means "unknown"
    let mtime = u32::try_from(modified.timestamp()).unwrap_or(0);
    let mut encoder = GzBuilder::new()
        .filename(original_name.replace('\0', ""))
        .mtime(mtime)
        .write(archive, Compression::default());

    io::copy(source, &mut encoder).map_err(compress_error)?;
    let archive = encoder.finish().map_err(compress_error)?;
    archive.sync_all().map_err(|e| {
        LoggingError::new(LoggingErrorKind::Sync(format!(
            "{}: {}",
            archive_path.display(),
            e
        )))
    })
}
