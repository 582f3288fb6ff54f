//! Core data types for the sabafly Discord bot utility library.
//!
//! This crate provides the foundation types shared by the other sabafly crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod snowflake;

pub use snowflake::{DISCORD_EPOCH_MS, ParseSnowflakeError, Snowflake};

/// Library name.
pub const NAME: &str = "sabafly";

/// Source repository of the library.
pub const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// Library version, fixed at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
