//! File indirection values
//!
//! A variable value written as `[filename]` stands for the text content of a
//! file in the variables directory.

/// A variable value that refers to a file by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indirection<'a> {
    raw: &'a str,
    filename: &'a str,
}

impl<'a> Indirection<'a> {
    /// Parses a stored value as an indirection.
    ///
    /// The whole value must be wrapped in square brackets with at least one
    /// character between them, and that inner text must stay on one line.
    /// Every leading `[` and trailing `]` is stripped to obtain the filename.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
        if inner.is_empty() || inner.contains('\n') {
            return None;
        }
        let filename = raw.trim_matches(|c| c == '[' || c == ']');
        Some(Self { raw, filename })
    }

    /// The filename to look up in the variables directory.
    #[must_use]
    pub const fn filename(&self) -> &'a str {
        self.filename
    }

    /// The value exactly as stored, brackets included.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bracketed_value_is_an_indirection() {
        let ind = Indirection::parse("[token.txt]").unwrap();
        assert_eq!(ind.filename(), "token.txt");
        assert_eq!(ind.raw(), "[token.txt]");
    }

    #[test]
    fn plain_values_are_not_indirections() {
        assert!(Indirection::parse("https://example.test").is_none());
        assert!(Indirection::parse("[]").is_none());
        assert!(Indirection::parse("[open").is_none());
        assert!(Indirection::parse("close]").is_none());
        assert!(Indirection::parse(" [padded] ").is_none());
    }

    #[test]
    fn multi_line_inner_text_is_not_an_indirection() {
        assert!(Indirection::parse("[a\nb]").is_none());
    }

    #[test]
    fn all_surrounding_brackets_are_stripped() {
        let ind = Indirection::parse("[[nested]]").unwrap();
        assert_eq!(ind.filename(), "nested");
    }

    #[test]
    fn brackets_inside_the_name_are_kept() {
        let ind = Indirection::parse("[a]b]").unwrap();
        assert_eq!(ind.filename(), "a]b");
    }
}
