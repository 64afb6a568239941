//! `init`: write a starter site.toml.
//!
//! The file holds the built-in profiles so a site can start from them and
//! edit in place.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProfileSet;
use crate::log;

use super::common::CONFIG_FILE;

/// Generate site.toml content with a header comment.
pub fn generate_config_template() -> Result<String> {
    let body = ProfileSet::builtin()
        .to_toml()
        .context("failed to serialize built-in profiles")?;

    Ok(format!(
        "# {} profile file (v{})\n\
         # `base` is shared by every profile; `profiles.<name>` override it.\n\n\
         {body}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Write `site.toml` into `dir`, refusing to overwrite unless `force`.
pub fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `--force` to overwrite it.",
            path.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
    fs::write(&path, generate_config_template()?)
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let template = generate_config_template().unwrap();
        assert!(template.starts_with("# "));
        assert_eq!(ProfileSet::from_str(&template).unwrap(), ProfileSet::builtin());
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), false).unwrap();
        assert!(path.exists());

        fs::write(&path, "# edited").unwrap();
        assert!(write_config(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited");

        write_config(temp.path(), true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "# edited");
    }

    #[test]
    fn test_write_config_creates_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("website");
        let path = write_config(&dir, false).unwrap();
        assert!(ProfileSet::from_path(&path, true).is_ok());
    }
}
