//! Emoji detection for message content.
//!
//! Recognises both Unicode emoji (including ZWJ sequences, flags and skin
//! tone variants, matched per grapheme cluster) and Discord custom emoji
//! written as `<:name:id>` or `<a:name:id>`.
//!
//! ```
//! assert!(sabafly_emoji::is_match("gg 😁"));
//! assert!(sabafly_emoji::is_match("<:modify:1082025248330891388>"));
//! assert!(!sabafly_emoji::is_match("plain text"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod custom;

pub use custom::{CustomEmoji, DISCORD_EMOJI};

use unicode_segmentation::UnicodeSegmentation;

/// Zero width joiner, the glue inside emoji sequences such as 🧑‍🚀.
pub const ZWJ: char = '\u{200d}';

/// Whether `text` contains any Unicode or Discord custom emoji.
pub fn is_match(text: &str) -> bool {
    DISCORD_EMOJI.is_match(text) || unicode_emojis(text).next().is_some()
}

/// Every emoji in `text`.
///
/// Unicode emoji come first in order of appearance, followed by Discord
/// custom emoji in order of appearance.
///
/// ```
/// let found = sabafly_emoji::find_all("<a:party:123456789012345678> 🇯🇵 ok 👍");
/// assert_eq!(found, vec!["🇯🇵", "👍", "<a:party:123456789012345678>"]);
/// ```
pub fn find_all(text: &str) -> Vec<String> {
    unicode_emojis(text)
        .chain(DISCORD_EMOJI.find_iter(text).map(|m| m.as_str()))
        .map(str::to_string)
        .collect()
}

fn unicode_emojis(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
        .filter(|grapheme| emojis::get(grapheme).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_match() {
        let cases = [
            ("😁", true),
            ("🇯🇵", true),
            ("1", false),
            ("A", false),
            ("<:modify:1082025248330891388>", true),
            ("<:modify:12>", false),
        ];
        for (input, want) in cases {
            assert_eq!(is_match(input), want, "is_match({input:?})");
        }
    }

    #[test]
    fn test_find_all_counts() {
        let cases = [
            ("😁", 1),
            ("🇯🇵", 1),
            ("1", 0),
            ("A", 0),
            ("<:modify:1082025248330891388>", 1),
            ("😁😁 <:a:1082025248330891388><:b:1082025248330891389>", 4),
        ];
        for (input, want) in cases {
            assert_eq!(find_all(input).len(), want, "find_all({input:?})");
        }
    }
}
