//! Discord snowflake identifiers.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01T00:00:00Z).
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A Discord snowflake ID.
///
/// The upper 42 bits hold milliseconds since [`DISCORD_EPOCH_MS`].
/// Serialized as a decimal string, the way the Discord API sends IDs;
/// deserialization also accepts plain integers.
///
/// # Examples
///
/// ```
/// use sabafly_core::Snowflake;
///
/// let id: Snowflake = "175928847299117063".parse().unwrap();
/// assert_eq!(id.get(), 175928847299117063);
/// assert_eq!(id.timestamp().timestamp_millis(), 1462015105796);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Wrap a raw ID.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw ID.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Creation time encoded in the ID.
    pub fn timestamp(self) -> DateTime<Utc> {
        let millis = (self.0 >> 22) + DISCORD_EPOCH_MS;
        Utc.timestamp_millis_opt(millis as i64)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Smallest snowflake with the given creation time.
    ///
    /// Instants before the Discord epoch clamp to zero.
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        let millis = u64::try_from(timestamp.timestamp_millis()).unwrap_or(0);
        Self(millis.saturating_sub(DISCORD_EPOCH_MS) << 22)
    }
}

/// Error returned when a string is not a decimal snowflake.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid snowflake: {:?}", input)]
pub struct ParseSnowflakeError {
    /// The rejected input
    pub input: String,
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self).map_err(|_| ParseSnowflakeError {
            input: s.to_string(),
        })
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a snowflake as a decimal string or an unsigned integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Snowflake, E> {
        Ok(Snowflake(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Snowflake, E> {
        u64::try_from(v)
            .map(Snowflake)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Snowflake, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_timestamp() {
        let id = Snowflake::new(175928847299117063);
        let floor = Snowflake::from_timestamp(id.timestamp());
        assert_eq!(floor.get() >> 22, id.get() >> 22);
        assert!(floor <= id);
    }

    #[test]
    fn test_before_epoch_clamps() {
        let early = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Snowflake::from_timestamp(early), Snowflake::new(0));
    }

    #[test]
    fn test_rejects_non_decimal() {
        assert!("12ab".parse::<Snowflake>().is_err());
        assert!("".parse::<Snowflake>().is_err());
    }
}
