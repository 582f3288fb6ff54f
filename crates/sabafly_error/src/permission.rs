//! Permission path error types.

/// Specific permission error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PermissionErrorKind {
    /// Permission string is not a well-formed dotted path
    #[display("Invalid permission path '{}': {}", path, reason)]
    InvalidPath {
        /// The rejected permission string
        path: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Permission error with location tracking.
///
/// Only strict parsing produces this error; membership queries never fail.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Permission Error: {} at line {} in {}", kind, line, file)]
pub struct PermissionError {
    /// The specific error kind
    pub kind: PermissionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PermissionError {
    /// Create a new permission error with location tracking.
    #[track_caller]
    pub fn new(kind: PermissionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PermissionErrorKind {
        &self.kind
    }
}
