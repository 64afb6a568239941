//! Dotted key paths naming a configuration value in diagnostics.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Path of a key as written in `site.toml`, e.g. `colors.primaryColor`.
///
/// Produced by `#[derive(Config)]`, one constant per field, so a diagnostic
/// can only name a key that exists.
///
/// ```ignore
/// diag.error(HighlightLayer::FIELDS.theme, "required field is missing");
/// // [highlight.theme]
/// // → required field is missing
/// ```
///
/// `Display` is meant for terminals. Use [`FieldPath::as_str`] when the path
/// ends up inside a stored message or hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_without_color() {
        owo_colors::set_override(false);
        let path = FieldPath::new("highlight.themeUrl");
        assert_eq!(path.to_string(), "`highlight.themeUrl`");
        assert_eq!(path.as_ref(), "highlight.themeUrl");
    }
}
