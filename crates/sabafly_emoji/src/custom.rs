//! Discord custom emoji.

use regex::Regex;
use sabafly_core::Snowflake;
use std::fmt;
use std::sync::LazyLock;

/// Matches a Discord custom emoji anywhere in a string.
pub static DISCORD_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a?:[A-Za-z0-9_~]+:[0-9]{18,20}>").expect("discord emoji regex")
});

static CUSTOM_EMOJI_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(a?):([A-Za-z0-9_~]+):([0-9]{18,20})>$").expect("custom emoji parts regex")
});

/// A guild emoji as written in message content.
///
/// Displays back in wire form.
///
/// ```
/// use sabafly_emoji::CustomEmoji;
///
/// let emoji = CustomEmoji::parse("<a:party:1082025248330891388>").unwrap();
/// assert!(emoji.animated);
/// assert_eq!(emoji.name, "party");
/// assert_eq!(emoji.to_string(), "<a:party:1082025248330891388>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomEmoji {
    /// Whether the emoji is animated
    pub animated: bool,
    /// Emoji name
    pub name: String,
    /// Emoji ID
    pub id: Snowflake,
}

impl fmt::Display for CustomEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.animated { "a" } else { "" };
        write!(f, "<{}:{}:{}>", prefix, self.name, self.id)
    }
}

impl CustomEmoji {
    /// Parse a string that is exactly one custom emoji.
    ///
    /// Returns `None` for anything else, including IDs too large for a
    /// snowflake.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = CUSTOM_EMOJI_PARTS.captures(text)?;
        let id = captures[3].parse().ok()?;
        Some(Self {
            animated: !captures[1].is_empty(),
            name: captures[2].to_string(),
            id,
        })
    }

    /// Every custom emoji embedded in `text`.
    pub fn find_all(text: &str) -> Vec<Self> {
        DISCORD_EMOJI
            .find_iter(text)
            .filter_map(|m| Self::parse(m.as_str()))
            .collect()
    }

    /// CDN URL of the emoji image.
    pub fn image_url(&self) -> String {
        let extension = if self.animated { "gif" } else { "png" };
        format!("https://cdn.discordapp.com/emojis/{}.{}", self.id, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        let emoji = CustomEmoji::parse("<:modify:1082025248330891388>").unwrap();
        assert!(!emoji.animated);
        assert_eq!(emoji.id, Snowflake::new(1082025248330891388));
        assert_eq!(emoji.to_string(), "<:modify:1082025248330891388>");
        assert_eq!(
            emoji.image_url(),
            "https://cdn.discordapp.com/emojis/1082025248330891388.png"
        );
    }

    #[test]
    fn test_parse_rejects_surrounding_text() {
        assert!(CustomEmoji::parse(" <:modify:1082025248330891388>").is_none());
        assert!(CustomEmoji::parse("<:modify:108>").is_none());
        assert!(CustomEmoji::parse("<:big:99999999999999999999>").is_none());
    }

    #[test]
    fn test_find_all_in_message() {
        let found = CustomEmoji::find_all("hi <:a:1082025248330891388> and <a:b:1082025248330891389>!");
        assert_eq!(found.len(), 2);
        assert!(found[1].animated);
    }
}
