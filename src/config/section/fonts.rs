//! `fonts` table: named font-family stacks referenced by custom CSS.
//!
//! ```toml
//! [base.fonts]
//! myFont = ["Times New Roman", "Serif"]
//! myOtherFont = ["-apple-system", "system-ui"]
//! ```

use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Font name to family stack, in fallback order.
pub type FontsConfig = BTreeMap<String, Vec<String>>;

/// Each stack needs at least one non-blank family.
pub(crate) fn validate(fonts: &FontsConfig, field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (name, families) in fonts {
        if families.is_empty() {
            diag.error(field, format!("font `{name}` has no families"));
        } else if families.iter().any(|f| f.trim().is_empty()) {
            diag.error(field, format!("font `{name}` has an empty family name"));
        }
    }
}
