//! Nested configuration tables and per-field value types.
//!
//! | Module      | Key              | Purpose                               |
//! |-------------|------------------|---------------------------------------|
//! | `colors`    | `colors`         | Primary/secondary theme colors        |
//! | `fonts`     | `fonts`          | Named font-family stacks              |
//! | `highlight` | `highlight`      | Code block syntax highlighting        |
//! | `links`     | `headerLinks`    | Top navigation bar entries            |
//! | `nav`       | `onPageNav`      | In-page navigation rendering          |

mod colors;
mod fonts;
mod highlight;
mod links;
mod nav;

pub use colors::{ColorsConfig, ColorsLayer};
pub use fonts::FontsConfig;
pub(crate) use fonts::validate as validate_fonts;
pub use highlight::{HighlightConfig, HighlightLayer, is_known_theme};
pub use links::{HeaderLink, HeaderLinkEntry};
pub use nav::OnPageNav;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Require a non-blank string value, reporting missing or empty values.
///
/// Returns the trimmed value when present.
pub(crate) fn require_str<'a>(
    value: Option<&'a str>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<&'a str> {
    match value.map(str::trim) {
        None => {
            diag.error(field, "required field is missing");
            None
        }
        Some("") => {
            diag.error(field, "must not be empty");
            None
        }
        Some(value) => Some(value),
    }
}
