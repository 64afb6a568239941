//! Partial site configuration: the base template and per-profile overrides.
//!
//! Every field is optional so a profile only states what differs from the
//! base. [`SiteLayer::merge`] lays an override onto a base; the merged layer
//! is validated and finalized into a [`SiteConfig`].

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::section::{ColorsLayer, FontsConfig, HeaderLinkEntry, HighlightLayer, OnPageNav};
use super::{SiteConfig, format_copyright};
use crate::utils::date::DateTimeUtc;

/// One layer of site configuration, keyed exactly like the renderer's record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "", rename_all = "camelCase")]
pub struct SiteLayer {
    /// Site title shown in the header and browser tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Absolute URL of the published site, without the base path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Path prefix every page is served under, e.g. `/euclid/`.
    #[serde(
        rename = "baseUrl",
        alias = "basePath",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(name = "baseUrl")]
    pub base_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// Display name in the copyright line (defaults to `organizationName`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_owner: Option<String>,

    /// Replaced as a whole by an override; never merged entry by entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_links: Option<Vec<HeaderLinkEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_icon: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,

    #[serde(skip_serializing_if = "ColorsLayer::is_empty")]
    pub colors: ColorsLayer,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fonts: FontsConfig,

    /// Documentation source directory, relative to the website root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_docs_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "HighlightLayer::is_empty")]
    pub highlight: HighlightLayer,

    /// Script URLs injected in load order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_page_nav: Option<OnPageNav>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Arbitrary keys passed through to the renderer's templates.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, toml::Value>,
}

impl SiteLayer {
    /// Lay `over` onto `self`.
    ///
    /// Scalars and lists set in `over` replace the base value. The `colors`,
    /// `highlight`, `fonts` and `extra` tables merge key by key.
    pub fn merge(self, over: Self) -> Self {
        let mut fonts = self.fonts;
        fonts.extend(over.fonts);

        let mut extra = self.extra;
        extra.extend(over.extra);

        Self {
            title: over.title.or(self.title),
            tagline: over.tagline.or(self.tagline),
            url: over.url.or(self.url),
            base_path: over.base_path.or(self.base_path),
            project_name: over.project_name.or(self.project_name),
            organization_name: over.organization_name.or(self.organization_name),
            copyright_owner: over.copyright_owner.or(self.copyright_owner),
            header_links: over.header_links.or(self.header_links),
            header_icon: over.header_icon.or(self.header_icon),
            footer_icon: over.footer_icon.or(self.footer_icon),
            favicon: over.favicon.or(self.favicon),
            colors: self.colors.merge(over.colors),
            fonts,
            custom_docs_path: over.custom_docs_path.or(self.custom_docs_path),
            highlight: self.highlight.merge(over.highlight),
            scripts: over.scripts.or(self.scripts),
            on_page_nav: over.on_page_nav.or(self.on_page_nav),
            repo_url: over.repo_url.or(self.repo_url),
            extra,
        }
    }

    /// Owner named in the copyright line.
    pub fn copyright_owner(&self) -> Option<&str> {
        self.copyright_owner
            .as_deref()
            .or(self.organization_name.as_deref())
    }

    /// Finalize a validated layer into the renderer's record.
    ///
    /// Callers must run [`SiteLayer::validate`] first; missing required
    /// values would otherwise surface as empty strings.
    pub(crate) fn into_config(self, date: DateTimeUtc) -> SiteConfig {
        let copyright = format_copyright(date.year, self.copyright_owner().unwrap_or_default());

        SiteConfig {
            title: text(self.title),
            tagline: text(self.tagline),
            url: text(self.url),
            base_path: text(self.base_path),
            project_name: text(self.project_name),
            organization_name: text(self.organization_name),
            header_links: self
                .header_links
                .unwrap_or_default()
                .into_iter()
                .map(HeaderLinkEntry::into_link)
                .collect(),
            header_icon: self.header_icon,
            footer_icon: self.footer_icon,
            favicon: self.favicon,
            colors: self.colors.into_config(),
            fonts: self.fonts,
            custom_docs_path: self.custom_docs_path,
            copyright,
            highlight: self.highlight.into_config(),
            scripts: self.scripts.unwrap_or_default(),
            on_page_nav: self.on_page_nav.unwrap_or_default(),
            repo_url: self.repo_url,
            extra: self.extra,
        }
    }
}

#[inline]
fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
