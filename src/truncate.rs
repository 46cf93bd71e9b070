use log::debug;

use crate::constants::PREVIEW_THRESHOLD;

/// Shortened form of a long description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a> {
    /// Raw markdown prefix of the input; render it separately
    pub text: &'a str,
    /// True when `text` is shorter than the input
    pub truncated: bool,
}

/// Cut `raw` down to a preview if it is `PREVIEW_THRESHOLD` characters or longer
///
/// Only the first `PREVIEW_THRESHOLD` characters are considered. The preview
/// ends just before the last whitespace among them. Lengths are counted in
/// chars, so a multi-byte character is never split. Text without any
/// whitespace in that window is cut hard at `PREVIEW_THRESHOLD` characters;
/// if that cut keeps the whole input, nothing was truncated.
pub fn truncate(raw: &str) -> Preview<'_> {
    // Byte offset of the char at index PREVIEW_THRESHOLD, if there is one
    let window_end = match raw.char_indices().nth(PREVIEW_THRESHOLD) {
        Some((offset, _)) => offset,
        None if raw.chars().count() < PREVIEW_THRESHOLD => {
            return Preview {
                text: raw,
                truncated: false,
            }
        }
        // exactly PREVIEW_THRESHOLD chars
        None => raw.len(),
    };

    let window = &raw[..window_end];
    let end = match window.rfind(char::is_whitespace) {
        Some(offset) => offset,
        None => {
            debug!(
                "No whitespace in the first {} characters, cutting mid-word",
                PREVIEW_THRESHOLD
            );
            window_end
        }
    };

    Preview {
        text: &raw[..end],
        truncated: end < raw.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        // "word0 word1 ..." long enough for most tests
        (0..n).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_text_unchanged() {
        let text = "A short description.";
        let preview = truncate(text);
        assert_eq!(preview.text, text);
        assert!(!preview.truncated);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            truncate(""),
            Preview {
                text: "",
                truncated: false
            }
        );
    }

    #[test]
    fn test_just_below_threshold_unchanged() {
        let text = "a ".repeat(199) + "b"; // 399 chars
        assert_eq!(text.chars().count(), 399);
        let preview = truncate(&text);
        assert_eq!(preview.text, text);
        assert!(!preview.truncated);
    }

    #[test]
    fn test_cuts_before_last_whitespace_in_window() {
        let text = words(200);
        let preview = truncate(&text);
        assert!(preview.truncated);
        assert!(preview.text.chars().count() < PREVIEW_THRESHOLD);

        let window: String = text.chars().take(PREVIEW_THRESHOLD).collect();
        let last_space = window.rfind(' ').unwrap();
        assert_eq!(preview.text, &window[..last_space]);
        assert!(!preview.text.ends_with(' '));
    }

    #[test]
    fn test_exactly_threshold_length_is_truncated() {
        let text = format!("{} {}", "a".repeat(199), "b".repeat(200));
        assert_eq!(text.chars().count(), PREVIEW_THRESHOLD);
        let preview = truncate(&text);
        assert!(preview.truncated);
        assert_eq!(preview.text, "a".repeat(199));
    }

    #[test]
    fn test_newline_counts_as_whitespace() {
        let text = format!("{}\n{}", "x".repeat(300), "y".repeat(300));
        let preview = truncate(&text);
        assert!(preview.truncated);
        assert_eq!(preview.text, "x".repeat(300));
    }

    #[test]
    fn test_no_whitespace_cuts_at_threshold() {
        let text = "z".repeat(1000);
        let preview = truncate(&text);
        assert!(preview.truncated);
        assert_eq!(preview.text.chars().count(), PREVIEW_THRESHOLD);
    }

    #[test]
    fn test_exactly_threshold_without_whitespace_is_whole() {
        let text = "q".repeat(PREVIEW_THRESHOLD);
        let preview = truncate(&text);
        assert_eq!(preview.text, text);
        assert!(!preview.truncated);

        let longer = "q".repeat(PREVIEW_THRESHOLD + 1);
        assert!(truncate(&longer).truncated);
    }

    #[test]
    fn test_multibyte_characters_not_split() {
        // 2 bytes per char, so a byte-based cut would land far earlier
        let text = format!("{} {}", "é".repeat(350), "ü".repeat(100));
        let preview = truncate(&text);
        assert!(preview.truncated);
        assert_eq!(preview.text, "é".repeat(350));

        let solid = "日".repeat(500);
        let preview = truncate(&solid);
        assert_eq!(preview.text, "日".repeat(PREVIEW_THRESHOLD));
    }
}
