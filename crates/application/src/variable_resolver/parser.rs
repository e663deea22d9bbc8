//! Placeholder parser for `{{name}}` syntax
//!
//! Finds placeholders with their positions. A placeholder is two opening
//! braces, optional whitespace, one or more word characters, optional
//! whitespace and two closing braces. Anything else is literal text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid")
});

/// A placeholder found in a template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The variable name, without braces or padding.
    pub name: String,

    /// Byte range in the original string covering the whole `{{ ... }}`.
    pub span: Range<usize>,
}

/// Finds all non-overlapping placeholders, left to right.
///
/// # Examples
///
/// ```
/// use reqcheck_application::variable_resolver::parser::parse_placeholders;
///
/// let found = parse_placeholders("{{host}}/users/{{ id }}");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].name, "host");
/// assert_eq!(found[1].name, "id");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<Placeholder> {
    PLACEHOLDER
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Placeholder {
                name: name.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}
