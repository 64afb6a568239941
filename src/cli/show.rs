//! `show`: print the resolved record of one profile.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

use crate::config::ProfileSet;
use crate::render::{to_js_module, to_json};
use crate::utils::date::DateTimeUtc;
use crate::log;

use super::args::{OutputFormat, ShowArgs};

pub fn show_profile(profiles: &ProfileSet, args: &ShowArgs, date: DateTimeUtc) -> Result<()> {
    let name = profiles.resolve_name(args.profile.as_deref())?;
    let config = profiles.load(name, date)?;

    let rendered = match args.format {
        OutputFormat::Json => {
            let mut json = to_json(&config, !args.compact)?;
            json.push('\n');
            json
        }
        OutputFormat::Js => to_js_module(&config, name, date)?,
    };

    if let Some(ref output_path) = args.output {
        fs::write(output_path, &rendered)
            .with_context(|| format!("failed to write '{}'", output_path.display()))?;
        log!("show"; "wrote profile `{}` to {}", name, output_path.display());
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(output: std::path::PathBuf, format: OutputFormat) -> ShowArgs {
        ShowArgs {
            profile: Some("parent".into()),
            format,
            compact: false,
            date: None,
            output: Some(output),
        }
    }

    #[test]
    fn test_show_writes_json_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        let date = DateTimeUtc::from_ymd(2024, 6, 15);

        show_profile(&ProfileSet::builtin(), &args(path.clone(), OutputFormat::Json), date).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["title"], "IHMC Robotics");
        assert_eq!(value["copyright"], "Copyright © 2024 IHMC Robotics");
    }

    #[test]
    fn test_show_writes_js_module() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("siteConfig.js");
        let date = DateTimeUtc::from_ymd(2024, 6, 15);

        show_profile(&ProfileSet::builtin(), &args(path.clone(), OutputFormat::Js), date).unwrap();

        let js = fs::read_to_string(&path).unwrap();
        assert!(js.contains("module.exports = siteConfig;"));
    }

    #[test]
    fn test_show_unknown_profile() {
        let temp = TempDir::new().unwrap();
        let mut args = args(temp.path().join("x.json"), OutputFormat::Json);
        args.profile = Some("staging".into());
        let date = DateTimeUtc::from_ymd(2024, 6, 15);
        assert!(show_profile(&ProfileSet::builtin(), &args, date).is_err());
        assert!(!temp.path().join("x.json").exists());
    }
}
