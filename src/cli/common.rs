//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::ProfileSet;
use crate::config::util::find_config_file;
use crate::debug;
use crate::utils::date::DateTimeUtc;

use super::Cli;

/// Default profile file name
pub const CONFIG_FILE: &str = "site.toml";

/// Reproducible-build timestamp honored when no date is given.
const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Where the profiles of this run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    File(PathBuf),
    Builtin,
}

impl ProfileSource {
    /// Locate the profile file.
    ///
    /// An explicit `--config` must exist; the default name is searched
    /// upward and falls back to the built-in profiles.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let found = find_config_file(path)
                    .with_context(|| format!("config file '{}' not found", path.display()))?;
                Ok(Self::File(found))
            }
            None => Ok(find_config_file(Path::new(CONFIG_FILE)).map_or(Self::Builtin, Self::File)),
        }
    }
}

/// Load the profile set selected by the CLI options.
pub fn load_profiles(cli: &Cli, strict: bool) -> Result<ProfileSet> {
    match ProfileSource::locate(cli.config.as_deref())? {
        ProfileSource::File(path) => {
            debug!("config"; "using {}", path.display());
            ProfileSet::from_path(&path, strict)
                .with_context(|| format!("failed to load '{}'", path.display()))
        }
        ProfileSource::Builtin => {
            debug!("config"; "no {} found, using built-in profiles", CONFIG_FILE);
            Ok(ProfileSet::builtin())
        }
    }
}

/// Resolve the build date: explicit value, then `SOURCE_DATE_EPOCH`, then now.
pub fn build_date(explicit: Option<DateTimeUtc>) -> DateTimeUtc {
    let epoch = std::env::var(SOURCE_DATE_EPOCH).ok();
    resolve_date(explicit, epoch.as_deref())
}

fn resolve_date(explicit: Option<DateTimeUtc>, epoch: Option<&str>) -> DateTimeUtc {
    if let Some(date) = explicit {
        return date;
    }
    if let Some(raw) = epoch {
        match DateTimeUtc::from_epoch_str(raw) {
            Some(date) => return date,
            None => debug!("config"; "ignoring invalid {}: '{}'", SOURCE_DATE_EPOCH, raw),
        }
    }
    DateTimeUtc::now()
}
