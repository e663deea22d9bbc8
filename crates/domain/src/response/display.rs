//! Display truncation for long response bodies.
//!
//! Only the displayed text is shortened; stored history keeps the full body.

/// Maximum number of characters shown for a response body.
pub const DISPLAY_LIMIT: usize = 10_000;

/// Appended to a body that was cut at the display limit.
pub const TRUNCATION_MARKER: &str = "[Partially displayed]";

/// Response body prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBody {
    /// Text to show.
    pub text: String,
    /// Whether the text was cut short.
    pub truncated: bool,
}

impl DisplayBody {
    /// Prepares `body` for display, keeping at most `limit` characters.
    #[must_use]
    pub fn new(body: &str, limit: usize) -> Self {
        match body.char_indices().nth(limit) {
            Some((cut, _)) => Self {
                text: format!("{}{TRUNCATION_MARKER}", &body[..cut]),
                truncated: true,
            },
            None => Self {
                text: body.to_string(),
                truncated: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_body_is_untouched() {
        let display = DisplayBody::new("hello", DISPLAY_LIMIT);
        assert_eq!(display.text, "hello");
        assert!(!display.truncated);
    }

    #[test]
    fn body_at_the_limit_is_untouched() {
        let body = "x".repeat(DISPLAY_LIMIT);
        let display = DisplayBody::new(&body, DISPLAY_LIMIT);
        assert!(!display.truncated);
        assert_eq!(display.text.len(), DISPLAY_LIMIT);
    }

    #[test]
    fn long_body_is_cut_with_marker() {
        let body = "y".repeat(12_000);
        let display = DisplayBody::new(&body, DISPLAY_LIMIT);
        assert!(display.truncated);
        assert_eq!(display.text, format!("{}{TRUNCATION_MARKER}", "y".repeat(10_000)));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let body = "é".repeat(5);
        let display = DisplayBody::new(&body, 3);
        assert_eq!(display.text, format!("ééé{TRUNCATION_MARKER}"));
    }
}
