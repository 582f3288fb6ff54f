//! Log severity levels.

use serde::{Deserialize, Serialize};

/// Severity of a log line, most severe first.
///
/// Displayed in uppercase (`WARNING`) as written to the log file. Parsing is
/// case-insensitive and also accepts `warn`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    /// Unrecoverable, the process panics
    Panic,
    /// Unrecoverable, the process exits
    Fatal,
    /// Operation failed
    Error,
    /// Something unexpected that was handled
    #[strum(to_string = "WARNING", serialize = "WARN")]
    Warning,
    /// Normal operation
    Info,
    /// Diagnostic detail
    Debug,
    /// Fine-grained tracing
    Trace,
}

impl TryFrom<String> for Level {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, strum::ParseError> {
        value.parse()
    }
}

impl Level {
    /// The `EnvFilter` directive that lets this level and more severe ones
    /// through. `tracing` has nothing above `error`, so `Panic` and `Fatal`
    /// map to it.
    pub fn directive(self) -> &'static str {
        match self {
            Level::Panic | Level::Fatal | Level::Error => "error",
            Level::Warning => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            _ => Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("TRACE".parse::<Level>().unwrap(), Level::Trace);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_directive_parses_as_filter() {
        assert_eq!(Level::Fatal.directive(), "error");
        assert_eq!(Level::Warning.directive(), "warn");
        for level in <Level as strum::IntoEnumIterator>::iter() {
            let directive = level.directive();
            assert!(
                tracing_subscriber::EnvFilter::try_new(directive).is_ok(),
                "{directive}"
            );
            let tracing_level: tracing::Level = directive.parse().unwrap();
            assert_eq!(Level::from(tracing_level), level.max(Level::Error));
        }
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(Level::from(tracing::Level::WARN), Level::Warning);
        assert_eq!(Level::from(tracing::Level::TRACE), Level::Trace);
    }
}
