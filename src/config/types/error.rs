//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unknown profile `{name}` (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("no profile given and no `default` profile configured")]
    NoProfile,

    #[error("unknown fields in config: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    // NOTE: No #[source] here - the diagnostics already render every error
    #[error("profile `{profile}`: {diagnostics}")]
    Diagnostics {
        profile: String,
        diagnostics: ConfigDiagnostics,
    },
}

impl ConfigError {
    /// Collected diagnostics, if this error came from validation.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics { diagnostics, .. } => Some(diagnostics),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "colors.primaryColor")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".if_supports_color(Stream::Stderr, |t| t.dimmed()),
            self.field.as_str().if_supports_color(Stream::Stderr, |t| t.cyan()),
            "]".if_supports_color(Stream::Stderr, |t| t.dimmed())
        )?;
        // Error message with red bullet
        write!(
            f,
            "{} {}",
            "→".if_supports_color(Stream::Stderr, |t| t.red()),
            self.message
        )?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n  {} {}",
                "hint:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected while validating one profile.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Convention violations that do not abort loading.
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.warnings
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self, profile: &str) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "profile `{}`:", profile);
        for warning in &self.warnings {
            eprintln!("{warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Whether any error or warning was reported for `field`.
    pub fn mentions(&self, field: FieldPath) -> bool {
        self.errors
            .iter()
            .chain(&self.warnings)
            .any(|d| d.field == field)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = Style::new().red().bold();
        writeln!(
            f,
            "{}\n",
            "config validation failed:".if_supports_color(Stream::Stderr, |t| t.style(heading))
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                self.errors
                    .len()
                    .if_supports_color(Stream::Stderr, |t| t.style(heading)),
                "errors".if_supports_color(Stream::Stderr, |t| t.dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    const TITLE: FieldPath = FieldPath::new("title");
    const BASE_URL: FieldPath = FieldPath::new("baseUrl");

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let unknown = ConfigError::UnknownProfile {
            name: "nightly".into(),
            available: "parent, project".into(),
        };
        let display = format!("{unknown}");
        assert!(display.contains("nightly"));
        assert!(display.contains("parent, project"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn_with_hint(TITLE, "looks odd", "check the casing");
        assert!(diag.clone().into_result().is_ok());

        diag.error_with_hint(BASE_URL, "must start with `/`", "use \"/euclid/\"");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.warnings().len(), 1);
        assert_eq!(err.errors()[0].hint.as_deref(), Some("use \"/euclid/\""));
    }

    #[test]
    fn test_diagnostics_display_counts_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(TITLE, "required field is missing");
        diag.error(BASE_URL, "required field is missing");
        let display = format!("{diag}");
        assert!(display.contains("title"));
        assert!(display.contains("baseUrl"));
        assert!(display.contains("errors"));
    }

    #[test]
    fn test_mentions() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn_with_hint(TITLE, "x", "y");
        assert!(diag.mentions(TITLE));
        assert!(!diag.mentions(BASE_URL));
    }
}
