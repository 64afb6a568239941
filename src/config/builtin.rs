//! Built-in IHMC documentation profiles.
//!
//! | Profile   | Site                                 |
//! |-----------|--------------------------------------|
//! | `parent`  | IHMC Robotics documentation portal   |
//! | `project` | Euclid library documentation (default) |
//!
//! Both publish under the same host and base path and share the theme;
//! they differ in title, tagline, navigation and docs location.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::section::{ColorsLayer, HeaderLinkEntry, HighlightLayer, OnPageNav};
use super::{ProfileSet, SiteLayer};

const SITE_URL: &str = "https://ihmcroboticsdocs.github.io";
const DOCS_HOME: &str = "https://ihmcroboticsdocs.github.io/docs/docshome.html";
const QUICK_START: &str = "https://ihmcroboticsdocs.github.io/docs/quickstarthome.html";
const IHMC_HOME: &str = "http://robots.ihmc.us/";
const LOGO: &str = "img/running-man-logo.png";

impl ProfileSet {
    /// The `parent` and `project` profiles, defaulting to `project`.
    pub fn builtin() -> Self {
        let profiles = BTreeMap::from([
            ("parent".to_string(), parent()),
            ("project".to_string(), project()),
        ]);

        Self {
            default: Some("project".to_string()),
            base: base(),
            profiles,
        }
    }
}

fn base() -> SiteLayer {
    SiteLayer {
        url: Some(SITE_URL.into()),
        base_path: Some("/euclid/".into()),
        project_name: Some("euclid".into()),
        organization_name: Some("ihmcroboticsdocs".into()),
        copyright_owner: Some("IHMC Robotics".into()),
        header_icon: Some(PathBuf::from(LOGO)),
        footer_icon: Some(PathBuf::from(LOGO)),
        favicon: Some(PathBuf::from("img/favicon.png")),
        colors: ColorsLayer {
            primary_color: Some("#064282".into()),
            secondary_color: Some("#4283c9".into()),
        },
        highlight: HighlightLayer {
            theme: Some("default".into()),
            ..Default::default()
        },
        scripts: Some(vec!["https://buttons.github.io/buttons.js".into()]),
        on_page_nav: Some(OnPageNav::Separate),
        ..Default::default()
    }
}

fn parent() -> SiteLayer {
    SiteLayer {
        title: Some("IHMC Robotics".into()),
        tagline: Some("Our Open Source Software Documentation".into()),
        header_links: Some(vec![
            HeaderLinkEntry::href(QUICK_START, "Quick Start"),
            HeaderLinkEntry::href(DOCS_HOME, "Docs"),
            HeaderLinkEntry::href(IHMC_HOME, "About"),
            HeaderLinkEntry::blog("Blog"),
        ]),
        custom_docs_path: Some(PathBuf::from("documentation")),
        ..Default::default()
    }
}

fn project() -> SiteLayer {
    SiteLayer {
        title: Some("Euclid".into()),
        tagline: Some("IHMC Euclid Documentation".into()),
        header_links: Some(vec![
            HeaderLinkEntry::href(SITE_URL, "IHMC Home"),
            HeaderLinkEntry::href(DOCS_HOME, "All IHMC Docs"),
            HeaderLinkEntry::href(IHMC_HOME, "About IHMC"),
        ]),
        ..Default::default()
    }
}
