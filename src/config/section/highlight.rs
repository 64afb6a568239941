//! `highlight` table for code block syntax highlighting.
//!
//! ```toml
//! [base.highlight]
//! theme = "default"
//! defaultLang = "java"
//! ```

use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::require_str;
use crate::config::ConfigDiagnostics;

/// Theme identifiers shipped with highlight.js.
const KNOWN_THEMES: &[&str] = &[
    "a11y-dark",
    "a11y-light",
    "agate",
    "an-old-hope",
    "androidstudio",
    "arduino-light",
    "arta",
    "ascetic",
    "atelier-cave-dark",
    "atelier-cave-light",
    "atelier-dune-dark",
    "atelier-dune-light",
    "atelier-forest-dark",
    "atelier-forest-light",
    "atelier-heath-dark",
    "atelier-heath-light",
    "atelier-lakeside-dark",
    "atelier-lakeside-light",
    "atelier-seaside-dark",
    "atelier-seaside-light",
    "atelier-sulphurpool-dark",
    "atelier-sulphurpool-light",
    "atom-one-dark",
    "atom-one-dark-reasonable",
    "atom-one-light",
    "brown-paper",
    "codepen-embed",
    "color-brewer",
    "darcula",
    "dark",
    "darkula",
    "default",
    "devibeans",
    "docco",
    "dracula",
    "far",
    "foundation",
    "github",
    "github-dark",
    "github-dark-dimmed",
    "github-gist",
    "gml",
    "googlecode",
    "gradient-dark",
    "gradient-light",
    "grayscale",
    "gruvbox-dark",
    "gruvbox-light",
    "hopscotch",
    "hybrid",
    "idea",
    "intellij-light",
    "ir-black",
    "isbl-editor-dark",
    "isbl-editor-light",
    "kimbie-dark",
    "kimbie-light",
    "lightfair",
    "lioshi",
    "magula",
    "mono-blue",
    "monokai",
    "monokai-sublime",
    "night-owl",
    "nnfx-dark",
    "nnfx-light",
    "nord",
    "obsidian",
    "ocean",
    "panda-syntax-dark",
    "panda-syntax-light",
    "paraiso-dark",
    "paraiso-light",
    "pojoaque",
    "purebasic",
    "qtcreator-dark",
    "qtcreator-light",
    "qtcreator_dark",
    "qtcreator_light",
    "railscasts",
    "rainbow",
    "routeros",
    "school-book",
    "shades-of-purple",
    "solarized-dark",
    "solarized-light",
    "srcery",
    "stackoverflow-dark",
    "stackoverflow-light",
    "sunburst",
    "tokyo-night-dark",
    "tokyo-night-light",
    "tomorrow",
    "tomorrow-night",
    "tomorrow-night-blue",
    "tomorrow-night-bright",
    "tomorrow-night-eighties",
    "vs",
    "vs2015",
    "xcode",
    "xt256",
    "zenburn",
];

static THEMES: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KNOWN_THEMES.iter().copied().collect());

/// Whether `theme` is a highlight.js theme identifier.
#[inline]
pub fn is_known_theme(theme: &str) -> bool {
    THEMES.contains(theme)
}

/// Highlighting options as written in a profile layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "highlight", rename_all = "camelCase")]
pub struct HighlightLayer {
    /// highlight.js theme name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Language assumed for fenced blocks without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lang: Option<String>,

    /// Stylesheet URL for a theme not bundled with highlight.js.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_url: Option<String>,
}

impl HighlightLayer {
    pub fn merge(self, over: Self) -> Self {
        Self {
            theme: over.theme.or(self.theme),
            default_lang: over.default_lang.or(self.default_lang),
            theme_url: over.theme_url.or(self.theme_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.default_lang.is_none() && self.theme_url.is_none()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(theme) = require_str(self.theme.as_deref(), Self::FIELDS.theme, diag) else {
            return;
        };

        // A custom stylesheet may carry any theme name
        if self.theme_url.is_none() && !is_known_theme(theme) {
            diag.warn_with_hint(
                Self::FIELDS.theme,
                format!("'{theme}' is not a highlight.js theme"),
                format!(
                    "use a bundled theme such as \"default\", or set {}",
                    Self::FIELDS.theme_url.as_str()
                ),
            );
        }

        if let Some(url) = &self.theme_url
            && url::Url::parse(url).is_err()
        {
            diag.error(Self::FIELDS.theme_url, format!("invalid URL: '{url}'"));
        }
    }

    pub(crate) fn into_config(self) -> HighlightConfig {
        HighlightConfig {
            theme: self.theme.map(|t| t.trim().to_string()).unwrap_or_default(),
            default_lang: self.default_lang,
            theme_url: self.theme_url,
        }
    }
}

/// Resolved highlighting options handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    pub theme: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name: &str) -> HighlightLayer {
        HighlightLayer {
            theme: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_known_themes() {
        assert!(is_known_theme("default"));
        assert!(is_known_theme("atom-one-dark"));
        assert!(!is_known_theme("Default"));
        assert!(!is_known_theme("neon-unicorn"));
    }

    #[test]
    fn test_missing_theme_is_error() {
        let mut diag = ConfigDiagnostics::new();
        HighlightLayer::default().validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "highlight.theme");
    }

    #[test]
    fn test_unknown_theme_is_warning() {
        let mut diag = ConfigDiagnostics::new();
        theme("neon-unicorn").validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let hint = diag.warnings()[0].hint.as_deref().unwrap();
        assert!(hint.ends_with("or set highlight.themeUrl"), "{hint:?}");
    }

    #[test]
    fn test_custom_theme_url_skips_lookup() {
        let mut diag = ConfigDiagnostics::new();
        let layer = HighlightLayer {
            theme_url: Some("https://cdn.example.com/neon.css".into()),
            ..theme("neon-unicorn")
        };
        layer.validate(&mut diag);
        assert!(diag.warnings().is_empty());
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_merge_keeps_base_theme() {
        let merged = theme("default").merge(HighlightLayer {
            default_lang: Some("java".into()),
            ..Default::default()
        });
        assert_eq!(merged.theme.as_deref(), Some("default"));
        assert_eq!(merged.default_lang.as_deref(), Some("java"));
    }
}
