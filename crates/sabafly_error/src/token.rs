//! Session token error types.

/// Kinds of token parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenErrorKind {
    /// Token does not consist of exactly three dot-separated parts
    #[display("invalid token format")]
    InvalidFormat,
    /// A token part is not valid unpadded base64
    #[display("Invalid base64 in token: {}", _0)]
    Base64(String),
    /// The encoded ID is not a valid snowflake
    #[display("Invalid snowflake in token: {}", _0)]
    InvalidId(String),
    /// The encoded timestamp does not fit a valid instant
    #[display("Invalid timestamp in token: {}", _0)]
    InvalidTimestamp(String),
}

/// Token error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Token Error: {} at line {} in {}", kind, line, file)]
pub struct TokenError {
    /// The kind of error that occurred
    pub kind: TokenErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TokenError {
    /// Create a new token error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TokenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TokenErrorKind {
        &self.kind
    }
}
