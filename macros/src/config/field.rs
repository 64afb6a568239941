//! Field information structures and parsing.

use crate::config::attr::{get_custom_name, has_attr};
use crate::config::types::KeyCase;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    /// Key as written in TOML and in serialized output.
    pub key: String,
    pub skip: bool,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field, case: KeyCase) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        // Raw identifiers (`r#type`) keep their plain spelling as keys
        let plain = ident.to_string().trim_start_matches("r#").to_string();

        Some(Self {
            name: ident.clone(),
            key: get_custom_name(attrs).unwrap_or_else(|| case.apply(&plain)),
            skip: has_attr(attrs, "skip"),
        })
    }
}
