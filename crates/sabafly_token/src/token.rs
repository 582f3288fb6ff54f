//! Token encoding and parsing.

use crate::{TokenError, TokenErrorKind, TokenResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sabafly_core::Snowflake;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unix time of 2011-01-01T00:00:00Z; token timestamps count from here.
pub const TOKEN_EPOCH: i64 = 1_293_840_000;

/// Number of random characters in a token.
pub const RANDOM_LEN: usize = 27;

/// A session token for one user.
///
/// Timestamps have whole-second precision, the resolution of the wire form.
/// Serialized as its wire string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token {
    id: Snowflake,
    timestamp: DateTime<Utc>,
    random: String,
}

impl Token {
    /// Issue a fresh token for `id`, stamped with the current time.
    pub fn new(id: Snowflake) -> Self {
        let random = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_LEN)
            .map(char::from)
            .collect();
        Self {
            id,
            timestamp: Utc::now().trunc_subsecs(0),
            random,
        }
    }

    /// Parse a token from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`TokenErrorKind::InvalidFormat`] unless there are exactly
    /// three parts, and a decoding error if a part is malformed.
    pub fn parse(text: &str) -> TokenResult<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        let [id, timestamp, random] = parts.as_slice() else {
            return Err(TokenError::new(TokenErrorKind::InvalidFormat));
        };

        let id_bytes = decode(id)?;
        let id = std::str::from_utf8(&id_bytes)
            .ok()
            .and_then(|decimal| decimal.parse::<Snowflake>().ok())
            .ok_or_else(|| {
                TokenError::new(TokenErrorKind::InvalidId(
                    String::from_utf8_lossy(&id_bytes).into_owned(),
                ))
            })?;

        let time_bytes = decode(timestamp)?;
        if time_bytes.len() > 8 {
            return Err(TokenError::new(TokenErrorKind::InvalidTimestamp(format!(
                "{} bytes",
                time_bytes.len()
            ))));
        }
        let offset = time_bytes
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
        let timestamp = i64::try_from(offset)
            .ok()
            .and_then(|offset| offset.checked_add(TOKEN_EPOCH))
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| {
                TokenError::new(TokenErrorKind::InvalidTimestamp(offset.to_string()))
            })?;

        Ok(Self {
            id,
            timestamp,
            random: random.to_string(),
        })
    }

    /// Whether two tokens have the same wire form.
    pub fn matches(&self, other: &Token) -> bool {
        self.to_string() == other.to_string()
    }

    /// The user this token was issued to.
    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// When this token was issued.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn decode(part: &str) -> TokenResult<Vec<u8>> {
    STANDARD_NO_PAD
        .decode(part)
        .map_err(|e| TokenError::new(TokenErrorKind::Base64(e.to_string())))
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // issue times before the token epoch encode as zero
        let offset = u64::try_from(self.timestamp.timestamp() - TOKEN_EPOCH).unwrap_or(0);
        let bytes = offset.to_be_bytes();
        let significant = bytes.iter().position(|&byte| byte != 0).unwrap_or(bytes.len());
        write!(
            f,
            "{}.{}.{}",
            STANDARD_NO_PAD.encode(self.id.to_string()),
            STANDARD_NO_PAD.encode(&bytes[significant..]),
            self.random
        )
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_shape() {
        let token = Token::new(Snowflake::new(42));
        let wire = token.to_string();
        let parts: Vec<&str> = wire.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "NDI");
        assert_eq!(parts[2].len(), RANDOM_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_epoch_encodes_as_empty_part() {
        let token = Token {
            id: Snowflake::new(1),
            timestamp: DateTime::from_timestamp(TOKEN_EPOCH, 0).unwrap(),
            random: "x".to_string(),
        };
        assert_eq!(token.to_string(), "MQ..x");
        assert_eq!(Token::parse("MQ..x").unwrap(), token);
    }

    #[test]
    fn test_known_timestamp_bytes() {
        let token = Token {
            id: Snowflake::new(1),
            timestamp: DateTime::from_timestamp(TOKEN_EPOCH + 256, 0).unwrap(),
            random: "r".to_string(),
        };
        // 256 = [0x01, 0x00]
        assert_eq!(token.to_string(), "MQ.AQA.r");
    }

    #[test]
    fn test_rejects_wrong_part_count() {
        for bad in ["", "a.b", "a.b.c.d"] {
            let err = Token::parse(bad).unwrap_err();
            assert_eq!(err.kind(), &TokenErrorKind::InvalidFormat);
        }
    }

    #[test]
    fn test_rejects_bad_parts() {
        assert!(matches!(
            Token::parse("!!.AQA.r").unwrap_err().kind(),
            TokenErrorKind::Base64(_)
        ));
        // "abc" decodes fine but is not a snowflake
        assert!(matches!(
            Token::parse("YWJj.AQA.r").unwrap_err().kind(),
            TokenErrorKind::InvalidId(_)
        ));
    }
}
