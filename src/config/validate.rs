//! Validation of a merged [`SiteLayer`].
//!
//! All problems are collected into [`ConfigDiagnostics`] so a broken profile
//! reports every error at once.
//!
//! # Checks
//!
//! | Field                   | Error                                  | Warning               |
//! |-------------------------|----------------------------------------|-----------------------|
//! | required strings        | missing or empty                       |                       |
//! | `url`                   | not an absolute http(s) URL with host  | carries a path        |
//! | `baseUrl`               | not `/`-delimited                      |                       |
//! | `projectName`, `organizationName` |                              | not `[a-z0-9-]+`      |
//! | `headerLinks`           | entry without target or label          |                       |
//! | icons, `customDocsPath` | absolute or empty path                 |                       |
//! | `colors`                | missing or not a hex color             |                       |
//! | `highlight.theme`       | missing                                | unknown theme         |
//! | `scripts`               | empty entry                            |                       |
//! | `extra`                 | key shadows a built-in field           |                       |

use std::path::Path;

use super::section::{self, require_str};
use super::util::{extract_url_path, is_slug};
use super::{ConfigDiagnostics, FieldPath, SiteLayer};

/// Output key computed at load time rather than configured.
const COPYRIGHT_KEY: &str = "copyright";

impl SiteLayer {
    /// Validate a merged layer.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = &Self::FIELDS;

        require_str(self.title.as_deref(), fields.title, diag);

        if let Some(url) = require_str(self.url.as_deref(), fields.url, diag) {
            validate_site_url(url, fields.url, fields.base_path, diag);
        }

        if let Some(base) = require_str(self.base_path.as_deref(), fields.base_path, diag) {
            validate_base_path(base, fields.base_path, diag);
        }

        for (field, value) in [
            (fields.project_name, self.project_name.as_deref()),
            (fields.organization_name, self.organization_name.as_deref()),
        ] {
            if let Some(name) = require_str(value, field, diag)
                && !is_slug(name)
            {
                diag.warn_with_hint(
                    field,
                    format!("'{name}' does not follow the [a-z0-9-]+ convention"),
                    "publishing integrations expect lowercase letters, digits and dashes",
                );
            }
        }

        if let Some(owner) = &self.copyright_owner
            && owner.trim().is_empty()
        {
            diag.error(fields.copyright_owner, "must not be empty");
        }

        for (index, link) in self.header_links.iter().flatten().enumerate() {
            link.validate(index, fields.header_links, diag);
        }

        let paths = [
            (fields.header_icon, self.header_icon.as_deref()),
            (fields.footer_icon, self.footer_icon.as_deref()),
            (fields.favicon, self.favicon.as_deref()),
            (fields.custom_docs_path, self.custom_docs_path.as_deref()),
        ];
        for (field, path) in paths {
            if let Some(path) = path {
                validate_relative_path(path, field, diag);
            }
        }

        self.colors.validate(diag);
        self.highlight.validate(diag);
        section::validate_fonts(&self.fonts, fields.fonts, diag);

        for (index, script) in self.scripts.iter().flatten().enumerate() {
            if script.trim().is_empty() {
                diag.error(fields.scripts, format!("entry {index} is empty"));
            }
        }

        if let Some(repo) = &self.repo_url
            && url::Url::parse(repo).is_err()
        {
            diag.error(fields.repo_url, format!("invalid URL: '{repo}'"));
        }

        for key in self.extra.keys() {
            if key == COPYRIGHT_KEY || Self::KEYS.contains(&key.as_str()) {
                diag.error_with_hint(
                    fields.extra,
                    format!("key `{key}` shadows a built-in field"),
                    "rename the key or set the field directly",
                );
            }
        }
    }
}

/// `url` must be an absolute http(s) URL with a host.
fn validate_site_url(
    url_str: &str,
    field: FieldPath,
    base_field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.github.io",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.github.io",
                );
            }
            // The path prefix belongs in baseUrl
            if let Some(path) = extract_url_path(url_str)
                && !path.is_empty()
            {
                diag.warn_with_hint(
                    field,
                    format!("URL carries the path '/{path}'"),
                    format!("move the path into {}, e.g. \"/{path}/\"", base_field.as_str()),
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.github.io",
            );
        }
    }
}

/// `baseUrl` must start and end with `/`.
fn validate_base_path(base: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if base.starts_with('/') && base.ends_with('/') {
        return;
    }

    let inner = base.trim_matches('/');
    let suggestion = if inner.is_empty() {
        "/".to_string()
    } else {
        format!("/{inner}/")
    };
    diag.error_with_hint(
        field,
        format!("'{base}' must start and end with `/`"),
        format!("use \"{suggestion}\""),
    );
}

fn validate_relative_path(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if path.as_os_str().is_empty() {
        diag.error(field, "path must not be empty");
    } else if path.has_root() {
        diag.error_with_hint(
            field,
            format!("path '{}' must be relative", path.display()),
            "paths are resolved against the website directory",
        );
    }
}
