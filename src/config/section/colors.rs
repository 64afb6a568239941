//! `colors` table.
//!
//! ```toml
//! [base.colors]
//! primaryColor = "#064282"
//! secondaryColor = "#4283c9"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::require_str;
use crate::config::ConfigDiagnostics;
use crate::config::util::is_hex_color;

/// Theme colors as written in a profile layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "colors", rename_all = "camelCase")]
pub struct ColorsLayer {
    /// Header and navigation background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    /// Accent color (links, highlights).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl ColorsLayer {
    /// Per-key merge: colors set in `over` win.
    pub fn merge(self, over: Self) -> Self {
        Self {
            primary_color: over.primary_color.or(self.primary_color),
            secondary_color: over.secondary_color.or(self.secondary_color),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none() && self.secondary_color.is_none()
    }

    /// Both colors are required CSS hex colors.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let entries = [
            (Self::FIELDS.primary_color, self.primary_color.as_deref()),
            (Self::FIELDS.secondary_color, self.secondary_color.as_deref()),
        ];

        for (field, value) in entries {
            if let Some(color) = require_str(value, field, diag)
                && !is_hex_color(color)
            {
                diag.error_with_hint(
                    field,
                    format!("'{color}' is not a CSS hex color"),
                    "use format like \"#064282\"",
                );
            }
        }
    }

    pub(crate) fn into_config(self) -> ColorsConfig {
        ColorsConfig {
            primary_color: trimmed(self.primary_color),
            secondary_color: trimmed(self.secondary_color),
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Resolved theme colors handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsConfig {
    pub primary_color: String,
    pub secondary_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(primary: Option<&str>, secondary: Option<&str>) -> ColorsLayer {
        ColorsLayer {
            primary_color: primary.map(Into::into),
            secondary_color: secondary.map(Into::into),
        }
    }

    #[test]
    fn test_merge_per_key() {
        let base = layer(Some("#064282"), Some("#4283c9"));
        let merged = base.merge(layer(None, Some("#ffffff")));
        assert_eq!(merged.primary_color.as_deref(), Some("#064282"));
        assert_eq!(merged.secondary_color.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_validate_requires_both() {
        let mut diag = ConfigDiagnostics::new();
        layer(Some("#064282"), None).validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, ColorsLayer::FIELDS.secondary_color);
    }

    #[test]
    fn test_validate_rejects_named_colors() {
        let mut diag = ConfigDiagnostics::new();
        layer(Some("navy"), Some("#4283c9")).validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("navy"));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(ColorsLayer::FIELDS.primary_color.as_str(), "colors.primaryColor");
        assert_eq!(ColorsLayer::KEYS, &["primaryColor", "secondaryColor"]);
    }
}
