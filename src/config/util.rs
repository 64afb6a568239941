//! Configuration utility functions.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Publishing identifiers (`projectName`, `organizationName`).
static SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// CSS hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Check a publishing identifier against the `[a-z0-9-]+` convention.
#[inline]
pub fn is_slug(s: &str) -> bool {
    SLUG.is_match(s)
}

/// Check a CSS hex color string.
#[inline]
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;

    // Get path and trim leading/trailing slashes
    let path = parsed.path().trim_matches('/');

    Some(path.to_string())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/euclid/website/static/  ← cwd
/// /home/user/euclid/site.toml        ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Upward search starting at `start`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
