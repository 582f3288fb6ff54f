//! Translation catalogue error types.

/// Kinds of translation loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TranslationErrorKind {
    /// Failed to list the translation directory
    #[display("Failed to read translation directory: {}", _0)]
    ReadDir(String),
    /// Failed to read a translation file
    #[display("Failed to read translation file: {}", _0)]
    ReadFile(String),
    /// Translation file contents could not be parsed
    #[display("Failed to parse translation file: {}", _0)]
    Parse(String),
    /// File extension is not yaml, yml, json or toml
    #[display("Unsupported translation file format: {}", _0)]
    UnsupportedFormat(String),
    /// Failed to record a missing message in the default locale file
    #[display("Failed to write translation file: {}", _0)]
    Write(String),
}

/// Translation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Translation Error: {} at line {} in {}", kind, line, file)]
pub struct TranslationError {
    /// The kind of error that occurred
    pub kind: TranslationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TranslationError {
    /// Create a new translation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TranslationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
