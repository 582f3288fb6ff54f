//! Opaque session tokens bound to a Discord user.
//!
//! A token has three dot-separated parts: the user's snowflake in decimal,
//! base64-encoded; the issue time as seconds since 2011-01-01 in minimal
//! big-endian bytes, base64-encoded; and 27 random alphanumerics. Base64 uses
//! the standard alphabet without padding.
//!
//! ```
//! use sabafly_core::Snowflake;
//! use sabafly_token::Token;
//!
//! let token = Token::new(Snowflake::new(1082025248330891388));
//! let wire = token.to_string();
//! let parsed: Token = wire.parse().unwrap();
//! assert!(parsed.matches(&token));
//! assert_eq!(parsed.id(), token.id());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod token;

pub use sabafly_error::{TokenError, TokenErrorKind};
pub use token::{RANDOM_LEN, TOKEN_EPOCH, Token};

/// Result type for token parsing.
pub type TokenResult<T> = Result<T, TokenError>;
