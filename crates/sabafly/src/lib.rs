//! sabafly - utilities for Discord bots
//!
//! # Features
//!
//! - **Permissions**: hierarchical permission trees with `*` wildcards
//! - **Logging**: a rotating, gzip-archiving log file behind `tracing`
//! - **Translations**: message catalogues keyed by Discord locale
//! - **Emoji**: Unicode and custom Discord emoji detection
//! - **Tokens**: opaque session tokens bound to a user ID
//! - **Configuration**: layered bot configuration files
//!
//! # Quick Start
//!
//! ```no_run
//! use sabafly::{BotConfig, PermissionTree};
//! use tracing::info;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BotConfig::load()?;
//! let logger = config.init_logging()?;
//!
//! let mut granted = PermissionTree::new();
//! granted.add("message.*");
//! info!(allowed = granted.has("message.delete"), "Checked permission");
//!
//! logger.rotate()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `sabafly_error` - Error types
//! - `sabafly_core` - Snowflake IDs and library metadata
//! - `sabafly_permissions` - Permission trees
//! - `sabafly_logging` - Rotating log files
//! - `sabafly_i18n` - Translations
//! - `sabafly_emoji` - Emoji detection
//! - `sabafly_token` - Session tokens
//!
//! This crate (`sabafly`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::BotConfig;

// Re-export foundation crates
pub use sabafly_core::*;
pub use sabafly_error::*;

pub use sabafly_emoji as emoji;
pub use sabafly_emoji::CustomEmoji;
pub use sabafly_i18n::{Locale, TranslationResult, Translator, TranslatorConfig};
pub use sabafly_logging::{
    DEFAULT_LOG_NAME, Level, LoggingConfig, RotatingLayer, RotatingLogger, archive_file_name,
    init_logging, init_logging_with_level,
};
pub use sabafly_permissions::{Checker, PermissionResult, PermissionTree, WILDCARD};
pub use sabafly_token::{TOKEN_EPOCH, Token, TokenResult};
