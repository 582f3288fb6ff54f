//! Error types for the sabafly library.
//!
//! This crate provides the error types shared by every sabafly crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use sabafly_error::{LoggingError, LoggingErrorKind, SabaflyResult};
//!
//! fn open_log() -> SabaflyResult<()> {
//!     Err(LoggingError::new(LoggingErrorKind::Open("latest.log: denied".to_string())))?
//! }
//!
//! match open_log() {
//!     Ok(()) => println!("opened"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod logging;
mod permission;
mod token;
mod translation;

pub use config::ConfigError;
pub use error::{SabaflyError, SabaflyErrorKind, SabaflyResult};
pub use logging::{LoggingError, LoggingErrorKind};
pub use permission::{PermissionError, PermissionErrorKind};
pub use token::{TokenError, TokenErrorKind};
pub use translation::{TranslationError, TranslationErrorKind};
