//! Chat-text helpers shared by the formatting modules.

/// Maximum characters of free-text description shown in a chat message.
pub const DESCRIPTION_LIMIT: usize = 200;

/// Truncate `text` to [`DESCRIPTION_LIMIT`] characters for chat display.
///
/// The continuation marker is appended even when nothing was cut; the bot's
/// message shape has always carried the trailing ellipsis.
#[must_use]
pub fn truncated(text: &str) -> String {
    let mut out: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_long_text() {
        let long = "x".repeat(300);
        let out = truncated(&long);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_marker_appended_even_when_short() {
        assert_eq!(truncated("hola"), "hola...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let accented = "á".repeat(250);
        let out = truncated(&accented);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + 3);
    }
}
