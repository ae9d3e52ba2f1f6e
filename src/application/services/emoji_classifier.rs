use std::sync::LazyLock;

use regex::Regex;

/// Detects messages made only of emoji.
pub struct EmojiClassifier;

impl EmojiClassifier {
    /// Returns true if `text` holds at least one emoji and nothing but emoji
    /// and whitespace.
    ///
    /// Covers pictographs, skin-tone modifiers, ZWJ sequences, flags, tag
    /// sequences and keycaps. Plain digits or `#` are not emoji on their own.
    #[must_use]
    pub fn is_emoji_only(text: &str) -> bool {
        static EMOJI_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                r"^(?:\s|[0-9#*]\x{FE0F}?\x{20E3}|[\p{Extended_Pictographic}\p{Emoji_Presentation}\x{1F1E6}-\x{1F1FF}\x{1F3FB}-\x{1F3FF}\x{E0020}-\x{E007F}\x{FE0F}\x{200D}])+$",
            )
            .unwrap()
        });

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.is_ascii() {
            return false;
        }

        EMOJI_ONLY_RE.is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("👍", true ; "single_pictograph")]
    #[test_case("😂😂😂", true ; "repeated")]
    #[test_case(" 🎉 🎉 ", true ; "spaced")]
    #[test_case("👍🏽", true ; "skin_tone")]
    #[test_case("👨\u{200D}👩\u{200D}👧", true ; "zwj_family")]
    #[test_case("🇫🇷", true ; "flag")]
    #[test_case("❤️", true ; "variation_selector")]
    #[test_case("1️⃣", true ; "keycap")]
    #[test_case("hi", false ; "plain_text")]
    #[test_case("hi 👋", false ; "mixed")]
    #[test_case("123", false ; "digits")]
    #[test_case("#", false ; "hash")]
    #[test_case("", false ; "empty")]
    #[test_case("   ", false ; "whitespace")]
    fn test_is_emoji_only(text: &str, expected: bool) {
        assert_eq!(EmojiClassifier::is_emoji_only(text), expected);
    }
}
