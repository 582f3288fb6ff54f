//! `tracing` integration.

use crate::{Level, LoggingConfig, RotatingLogger};
use chrono::Local;
use sabafly_error::{LoggingError, LoggingErrorKind, SabaflyResult};
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// A [`Layer`] that writes events to a [`RotatingLogger`].
///
/// Only events whose level appears in the logger's configured `levels` are
/// written. The event's `message` comes first, followed by its other fields
/// as `key=value`. Events from this crate itself are skipped so that a
/// rollover never logs into the logger that is rotating.
///
/// A failed write cannot be returned through `tracing`, so it is reported on
/// stderr and the line is dropped.
#[derive(Debug, Clone)]
pub struct RotatingLayer {
    logger: Arc<RotatingLogger>,
}

impl RotatingLayer {
    /// Forward events to `logger`.
    pub fn new(logger: Arc<RotatingLogger>) -> Self {
        Self { logger }
    }

    /// The logger events are written to.
    pub fn logger(&self) -> &Arc<RotatingLogger> {
        &self.logger
    }
}

impl<S> Layer<S> for RotatingLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            return;
        }

        let level = Level::from(*metadata.level());
        if !self.logger.config().levels().contains(&level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if let Err(e) = self.logger.log(level, &visitor.finish(), Local::now()) {
            eprintln!("{}: dropped log line: {}", env!("CARGO_CRATE_NAME"), e);
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {}", self.message, fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

fn env_filter(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.directive()))
}

/// Install a global subscriber that logs to stdout and to a rotating file.
///
/// Same as [`init_logging_with_level`] with a default level of
/// [`Level::Info`].
///
/// # Errors
///
/// Returns error if the logger cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(config: LoggingConfig) -> SabaflyResult<Arc<RotatingLogger>> {
    init_logging_with_level(config, Level::Info)
}

/// Install a global subscriber that logs to stdout and to a rotating file.
///
/// Both outputs respect `RUST_LOG`, falling back to `default_level` when it
/// is unset; the file additionally keeps only the configured `levels`.
/// Returns the logger so the caller can [`close`](RotatingLogger::close) or
/// [`rotate`](RotatingLogger::rotate) it.
///
/// # Errors
///
/// Returns error if the logger cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging_with_level(
    config: LoggingConfig,
    default_level: Level,
) -> SabaflyResult<Arc<RotatingLogger>> {
    let logger = Arc::new(RotatingLogger::new(config)?);

    // Create fmt layer for human-readable logs
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(env_filter(default_level));

    let file_layer =
        RotatingLayer::new(Arc::clone(&logger)).with_filter(env_filter(default_level));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::new(LoggingErrorKind::Subscriber(e.to_string())))?;

    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_then_fields() {
        let visitor = MessageVisitor {
            message: "joined".to_string(),
            fields: vec!["user=abc".to_string(), "guild=1".to_string()],
        };
        assert_eq!(visitor.finish(), "joined user=abc guild=1");
    }

    #[test]
    fn test_fields_without_message() {
        let visitor = MessageVisitor {
            message: String::new(),
            fields: vec!["count=3".to_string()],
        };
        assert_eq!(visitor.finish(), "count=3");
    }
}
