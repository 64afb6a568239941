//! `check`: validate profiles and report every problem at once.

use anyhow::{Result, bail};

use crate::config::ProfileSet;
use crate::{debug, log};
use crate::utils::date::DateTimeUtc;
use crate::utils::plural::plural_count;

/// Totals over the checked profiles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub failed: usize,
    pub warnings: usize,
    /// `default` names a profile that is not defined.
    pub bad_default: bool,
}

/// Validate `names` (every profile when empty) and print diagnostics.
pub fn check_profiles(profiles: &ProfileSet, names: &[String], date: DateTimeUtc) -> Result<()> {
    let summary = run_checks(profiles, names, date)?;

    if summary.bad_default {
        bail!("`default` does not name a defined profile");
    }
    if summary.failed > 0 {
        bail!(
            "{} of {} failed validation",
            summary.failed,
            plural_count(summary.checked, "profile")
        );
    }

    log!(
        "ok";
        "{} valid ({})",
        plural_count(summary.checked, "profile"),
        plural_count(summary.warnings, "warning")
    );
    Ok(())
}

fn run_checks(profiles: &ProfileSet, names: &[String], date: DateTimeUtc) -> Result<CheckSummary> {
    let selected: Vec<&str> = if names.is_empty() {
        profiles.names()
    } else {
        names.iter().map(String::as_str).collect()
    };

    if selected.is_empty() {
        bail!("no profiles defined");
    }

    let mut summary = CheckSummary::default();

    // Commands run without a profile argument fall back to `default`
    if profiles.default.is_some()
        && let Err(e) = profiles.resolve_name(None)
    {
        summary.bad_default = true;
        log!("error"; "default profile: {}", e);
    }

    for name in selected {
        let (layer, diag) = profiles.diagnose(name)?;
        summary.checked += 1;
        summary.warnings += diag.warnings().len();
        diag.print_warnings(name);

        if diag.has_errors() {
            summary.failed += 1;
            log!("error"; "profile `{}`:", name);
            eprintln!("{diag}");
            continue;
        }

        let config = layer.into_config(date);
        log!("check"; "profile `{}` ok: {}{}", name, config.url, config.base_path);
        debug!(
            "check";
            "theme `{}`, header links: {}",
            config.highlight_theme(),
            config.header_labels().join(", ")
        );
    }

    Ok(summary)
}
