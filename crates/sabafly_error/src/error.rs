//! Top-level error wrapper types.

use crate::{ConfigError, LoggingError, PermissionError, TokenError, TranslationError};

/// The union of every sabafly error.
///
/// # Examples
///
/// ```
/// use sabafly_error::{ConfigError, SabaflyError};
///
/// let err: SabaflyError = ConfigError::new("missing token").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SabaflyErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Rotating logger error
    #[from(LoggingError)]
    Logging(LoggingError),
    /// Permission path error
    #[from(PermissionError)]
    Permission(PermissionError),
    /// Session token error
    #[from(TokenError)]
    Token(TokenError),
    /// Translation catalogue error
    #[from(TranslationError)]
    Translation(TranslationError),
}

/// Sabafly error with kind discrimination.
///
/// # Examples
///
/// ```
/// use sabafly_error::{ConfigError, SabaflyResult};
///
/// fn might_fail() -> SabaflyResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sabafly Error: {}", _0)]
pub struct SabaflyError(Box<SabaflyErrorKind>);

impl SabaflyError {
    /// Create a new error from a kind.
    pub fn new(kind: SabaflyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SabaflyErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SabaflyErrorKind
impl<T> From<T> for SabaflyError
where
    T: Into<SabaflyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for sabafly operations.
pub type SabaflyResult<T> = std::result::Result<T, SabaflyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoggingErrorKind, TokenErrorKind};

    #[test]
    fn test_logging_error_converts() {
        let err: SabaflyError =
            LoggingError::new(LoggingErrorKind::Write("disk full".to_string())).into();
        assert!(matches!(err.kind(), SabaflyErrorKind::Logging(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_location_is_tracked() {
        let err = TokenError::new(TokenErrorKind::InvalidFormat);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
