//! Named configuration profiles sharing one base layer.
//!
//! ```toml
//! default = "project"
//!
//! [base]
//! url = "https://ihmcroboticsdocs.github.io"
//! baseUrl = "/euclid/"
//!
//! [profiles.project]
//! title = "Euclid"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{ConfigDiagnostics, ConfigError, SiteConfig, SiteLayer};
use crate::log;
use crate::utils::date::DateTimeUtc;

/// A base layer plus named override layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSet {
    /// Profile used when none is named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Values shared by every profile.
    pub base: SiteLayer,

    pub profiles: BTreeMap<String, SiteLayer>,
}

impl ProfileSet {
    /// Parse a profile set from TOML content.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile set from a file with unknown field detection.
    ///
    /// Unknown keys are reported as warnings, or rejected when `strict`.
    pub fn from_path(path: &Path, strict: bool) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (set, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                return Err(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(set)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let set = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((set, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Whether `name` is the configured default.
    pub fn is_default(&self, name: &str) -> bool {
        self.default.as_deref() == Some(name)
    }

    /// Resolve an optional profile name to a defined profile.
    ///
    /// Without a name: the configured default, or the only profile if there
    /// is exactly one.
    pub fn resolve_name<'a>(&'a self, name: Option<&'a str>) -> Result<&'a str, ConfigError> {
        let name = match name.or(self.default.as_deref()) {
            Some(name) => name,
            None if self.profiles.len() == 1 => return Ok(self.names()[0]),
            None => return Err(ConfigError::NoProfile),
        };

        if self.profiles.contains_key(name) {
            Ok(name)
        } else {
            Err(ConfigError::UnknownProfile {
                name: name.to_string(),
                available: self.available(),
            })
        }
    }

    fn available(&self) -> String {
        if self.profiles.is_empty() {
            "none".to_string()
        } else {
            self.names().join(", ")
        }
    }

    /// The base layer with profile `name` laid over it.
    pub fn layer(&self, name: &str) -> Result<SiteLayer, ConfigError> {
        let over = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: name.to_string(),
                available: self.available(),
            })?;
        Ok(self.base.clone().merge(over.clone()))
    }

    /// Merge and validate profile `name` without failing on diagnostics.
    pub fn diagnose(&self, name: &str) -> Result<(SiteLayer, ConfigDiagnostics), ConfigError> {
        let layer = self.layer(name)?;
        let mut diag = ConfigDiagnostics::new();
        layer.validate(&mut diag);
        Ok((layer, diag))
    }

    /// Build the final record for profile `name`.
    ///
    /// Warnings are printed; any error aborts with every collected error.
    pub fn load(&self, name: &str, date: DateTimeUtc) -> Result<SiteConfig, ConfigError> {
        let (layer, diag) = self.diagnose(name)?;
        diag.print_warnings(name);
        diag.into_result()
            .map_err(|diagnostics| ConfigError::Diagnostics {
                profile: name.to_string(),
                diagnostics,
            })?;
        Ok(layer.into_config(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DATE: DateTimeUtc = DateTimeUtc::from_ymd(2024, 6, 15);

    const SITE_TOML: &str = r##"
default = "docs"

[base]
title = "Robotics"
url = "https://example.github.io"
baseUrl = "/robot/"
projectName = "robot"
organizationName = "example"
colors = { primaryColor = "#000000", secondaryColor = "#ffffff" }
highlight = { theme = "github" }

[profiles.docs]
tagline = "Docs"
headerLinks = [{ href = "docs/intro", label = "Intro" }, { blog = true, label = "Blog" }]

[profiles.portal]
title = "Portal"
"##;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_str() {
        let set = ProfileSet::from_str(SITE_TOML).unwrap();
        assert_eq!(set.default.as_deref(), Some("docs"));
        assert_eq!(set.names(), ["docs", "portal"]);
        assert!(set.is_default("docs"));
    }

    #[test]
    fn test_from_str_rejects_wrong_shape() {
        let err = ProfileSet::from_str("[base]\ntitle = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_merges_base() {
        let set = ProfileSet::from_str(SITE_TOML).unwrap();
        let docs = set.load("docs", DATE).unwrap();
        assert_eq!(docs.title, "Robotics");
        assert_eq!(docs.tagline, "Docs");
        assert_eq!(docs.header_labels(), ["Intro", "Blog"]);
        assert_eq!(docs.copyright, "Copyright © 2024 example");

        let portal = set.load("portal", DATE).unwrap();
        assert_eq!(portal.title, "Portal");
        assert!(portal.header_links.is_empty());
        assert_eq!(portal.colors, docs.colors);
    }

    #[test]
    fn test_resolve_name() {
        let set = ProfileSet::from_str(SITE_TOML).unwrap();
        assert_eq!(set.resolve_name(None).unwrap(), "docs");
        assert_eq!(set.resolve_name(Some("portal")).unwrap(), "portal");
        assert!(matches!(
            set.resolve_name(Some("nightly")),
            Err(ConfigError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn test_resolve_name_without_default() {
        let mut set = ProfileSet::from_str(SITE_TOML).unwrap();
        set.default = None;
        assert!(matches!(set.resolve_name(None), Err(ConfigError::NoProfile)));

        set.profiles.remove("portal");
        assert_eq!(set.resolve_name(None).unwrap(), "docs");
    }

    #[test]
    fn test_load_reports_all_errors() {
        let content = SITE_TOML.replace("baseUrl = \"/robot/\"", "baseUrl = \"robot\"");
        let content = content.replace("{ blog = true, label = \"Blog\" }", "{ label = \"Blog\" }");
        let set = ProfileSet::from_str(&content).unwrap();

        let err = set.load("docs", DATE).unwrap_err();
        let diag = err.diagnostics().unwrap();
        assert_eq!(diag.len(), 2);
        assert!(diag.mentions(SiteLayer::FIELDS.base_path));
        assert!(diag.mentions(SiteLayer::FIELDS.header_links));
    }

    #[test]
    fn test_diagnose_keeps_warnings() {
        let content = SITE_TOML.replace("theme = \"github\"", "theme = \"neon\"");
        let set = ProfileSet::from_str(&content).unwrap();
        let (_, diag) = set.diagnose("portal").unwrap();
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_from_path_unknown_fields() {
        let file = write_temp(&format!("{SITE_TOML}\ngaTrackingId = \"UA-1\"\n"));

        let set = ProfileSet::from_path(file.path(), false).unwrap();
        assert_eq!(set.names().len(), 2);

        match ProfileSet::from_path(file.path(), true) {
            Err(ConfigError::UnknownFields(fields)) => {
                assert_eq!(fields, ["profiles.portal.gaTrackingId"]);
            }
            other => panic!("expected unknown fields, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_extra_is_known() {
        let file = write_temp(&format!("{SITE_TOML}\n[profiles.portal.extra]\ngaTrackingId = \"UA-1\"\n"));
        let set = ProfileSet::from_path(file.path(), true).unwrap();
        let portal = set.load("portal", DATE).unwrap();
        assert_eq!(portal.extra["gaTrackingId"].as_str(), Some("UA-1"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        let err = ProfileSet::from_path(&path, false).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref p, _) if *p == path));
    }

    #[test]
    fn test_builtin_survives_toml() {
        let set = ProfileSet::builtin();
        let content = set.to_toml().unwrap();
        assert_eq!(ProfileSet::from_str(&content).unwrap(), set);
    }
}
