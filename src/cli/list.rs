//! `list`: print profile names, one per line.

use std::io::Write;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::config::ProfileSet;

pub fn list_profiles(profiles: &ProfileSet) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in profile_lines(profiles) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// One line per profile; the default is marked.
fn profile_lines(profiles: &ProfileSet) -> Vec<String> {
    profiles
        .names()
        .into_iter()
        .map(|name| {
            let title = profiles
                .layer(name)
                .ok()
                .and_then(|layer| layer.title)
                .unwrap_or_default();
            let marker = if profiles.is_default(name) {
                format!(
                    " {}",
                    "(default)".if_supports_color(Stream::Stdout, |t| t.green())
                )
            } else {
                String::new()
            };
            format!(
                "{name}\t{}{marker}",
                title.if_supports_color(Stream::Stdout, |t| t.dimmed())
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lines() {
        let lines = profile_lines(&ProfileSet::builtin());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("parent\t"));
        assert!(lines[0].contains("IHMC Robotics"));
        assert!(!lines[0].contains("(default)"));
        assert!(lines[1].starts_with("project\t"));
        assert!(lines[1].contains("(default)"));
    }
}
