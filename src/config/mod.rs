//! Site configuration records for the documentation renderer.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Nested tables and value types
//! │   ├── colors     # colors.primaryColor / secondaryColor
//! │   ├── fonts      # fonts.<name> = [families]
//! │   ├── highlight  # highlight.theme
//! │   ├── links      # headerLinks entries
//! │   └── nav        # onPageNav
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── builtin        # Built-in `parent` / `project` profiles
//! ├── layer          # SiteLayer (partial config) and merging
//! ├── profile        # ProfileSet (base + named overrides)
//! ├── validate       # SiteLayer validation
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! ```text
//! ProfileSet { base, profiles }
//!        │  layer(name): base.merge(profiles[name])
//!        ▼
//!    SiteLayer ──validate──► ConfigDiagnostics (errors abort)
//!        │  into_config(date)
//!        ▼
//!    SiteConfig (immutable, serialized for the renderer)
//! ```

mod builtin;
mod layer;
mod profile;
pub mod section;
pub mod types;
pub mod util;
mod validate;

pub use layer::SiteLayer;
pub use profile::ProfileSet;
pub use section::{
    ColorsConfig, FontsConfig, HeaderLink, HeaderLinkEntry, HighlightConfig, OnPageNav,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::utils::date::DateTimeUtc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Prefix of the computed copyright line.
pub const COPYRIGHT_PREFIX: &str = "Copyright ©";

// ============================================================================
// root configuration
// ============================================================================

/// Fully resolved site configuration consumed by the renderer.
///
/// Field names and nesting are the renderer's schema: serialization emits
/// exactly these keys in this order. Built once per site build and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,

    /// Empty when not configured.
    pub tagline: String,

    pub url: String,

    /// Always starts and ends with `/`.
    #[serde(rename = "baseUrl")]
    pub base_path: String,

    pub project_name: String,

    pub organization_name: String,

    /// Rendered left to right in the navigation bar.
    pub header_links: Vec<HeaderLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_icon: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,

    pub colors: ColorsConfig,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fonts: FontsConfig,

    /// `None` leaves the location to the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_docs_path: Option<PathBuf>,

    /// Computed once at load from the build date.
    pub copyright: String,

    pub highlight: HighlightConfig,

    /// Load order is preserved.
    pub scripts: Vec<String>,

    #[serde(skip_serializing_if = "OnPageNav::is_none")]
    pub on_page_nav: OnPageNav,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Custom keys for the renderer's templates.
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl SiteConfig {
    /// Highlight.js theme name.
    pub fn highlight_theme(&self) -> &str {
        &self.highlight.theme
    }

    /// Labels of the header links, in navigation order.
    pub fn header_labels(&self) -> Vec<&str> {
        self.header_links.iter().map(HeaderLink::label).collect()
    }
}

/// Build the copyright line: `"Copyright © {year} {owner}"`.
///
/// The year is always four digits.
pub fn format_copyright(year: u16, owner: &str) -> String {
    format!("{COPYRIGHT_PREFIX} {year:04} {}", owner.trim())
}

/// Load a built-in profile (`parent` or `project`) for the given build date.
pub fn load_site_configuration(profile: &str, date: DateTimeUtc) -> Result<SiteConfig, ConfigError> {
    ProfileSet::builtin().load(profile, date)
}

// ============================================================================
// tests
// ============================================================================
