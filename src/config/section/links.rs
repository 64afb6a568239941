//! `headerLinks` entries for the top navigation bar.
//!
//! Entries render left to right in the order they are written.
//!
//! ```toml
//! headerLinks = [
//!     { href = "https://ihmcroboticsdocs.github.io", label = "IHMC Home" },
//!     { blog = true, label = "Blog" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A header link as written in a profile layer.
///
/// Every key is optional here so that malformed entries reach validation
/// instead of failing deserialization with an opaque error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLinkEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl HeaderLinkEntry {
    /// Direct link to a URL or site path.
    pub fn href(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            blog: None,
            label: Some(label.into()),
        }
    }

    /// Link to the blog index.
    pub fn blog(label: impl Into<String>) -> Self {
        Self {
            href: None,
            blog: Some(true),
            label: Some(label.into()),
        }
    }

    /// Validate entry `index` of `field`.
    pub fn validate(&self, index: usize, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let href = self.href.as_deref().map(str::trim);
        let blog = self.blog == Some(true);

        match (href, blog) {
            (Some(_), true) => diag.error_with_hint(
                field,
                format!("entry {index} sets both `href` and `blog`"),
                "keep `href` for a direct link or `blog = true` for the blog index",
            ),
            (Some(""), false) => diag.error(field, format!("entry {index} has an empty `href`")),
            (None, false) => diag.error_with_hint(
                field,
                format!("entry {index} has no link target"),
                "add `href = \"...\"` or `blog = true`",
            ),
            _ => {}
        }

        match self.label.as_deref().map(str::trim) {
            None => diag.error(field, format!("entry {index} has no `label`")),
            Some("") => diag.error(field, format!("entry {index} has an empty `label`")),
            Some(_) => {}
        }
    }

    /// Convert a validated entry.
    pub(crate) fn into_link(self) -> HeaderLink {
        let label = self.label.map(|l| l.trim().to_string()).unwrap_or_default();
        match self.href {
            Some(href) => HeaderLink::Href {
                href: href.trim().to_string(),
                label,
            },
            None => HeaderLink::Blog { blog: true, label },
        }
    }
}

/// A resolved header link, serialized in the renderer's shape:
/// `{ href, label }` or `{ blog: true, label }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderLink {
    Href { href: String, label: String },
    Blog { blog: bool, label: String },
}

impl HeaderLink {
    pub fn label(&self) -> &str {
        match self {
            Self::Href { label, .. } | Self::Blog { label, .. } => label,
        }
    }

    pub const fn is_blog(&self) -> bool {
        matches!(self, Self::Blog { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldPath = FieldPath::new("headerLinks");

    fn check(entry: &HeaderLinkEntry) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        entry.validate(0, FIELD, &mut diag);
        diag
    }

    #[test]
    fn test_valid_entries() {
        assert!(check(&HeaderLinkEntry::href("http://robots.ihmc.us/", "About")).is_empty());
        assert!(check(&HeaderLinkEntry::blog("Blog")).is_empty());
    }

    #[test]
    fn test_missing_target() {
        let entry = HeaderLinkEntry {
            label: Some("Orphan".into()),
            ..Default::default()
        };
        let diag = check(&entry);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("no link target"));
    }

    #[test]
    fn test_blog_false_is_not_a_target() {
        let entry = HeaderLinkEntry {
            blog: Some(false),
            label: Some("Blog".into()),
            ..Default::default()
        };
        assert_eq!(check(&entry).len(), 1);
    }

    #[test]
    fn test_missing_label() {
        let entry = HeaderLinkEntry {
            href: Some("a".into()),
            ..Default::default()
        };
        let diag = check(&entry);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("label"));
    }

    #[test]
    fn test_empty_entry_reports_both() {
        assert_eq!(check(&HeaderLinkEntry::default()).len(), 2);
    }

    #[test]
    fn test_both_targets_rejected() {
        let entry = HeaderLinkEntry {
            href: Some("a".into()),
            blog: Some(true),
            label: Some("A".into()),
        };
        assert_eq!(check(&entry).len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let links = vec![
            HeaderLinkEntry::href("a", "A").into_link(),
            HeaderLinkEntry::blog("Blog").into_link(),
        ];
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(
            json,
            r#"[{"href":"a","label":"A"},{"blog":true,"label":"Blog"}]"#
        );
        assert!(links[1].is_blog());
    }
}
