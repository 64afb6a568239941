//! Proc macros for sitecfg.
//!
//! # Config derive macro
//!
//! Generates typed field path accessors for diagnostics and the list of
//! keys a config layer understands.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "colors", rename_all = "camelCase")]
//! pub struct ColorsLayer {
//!     pub primary_color: Option<String>,
//!
//!     #[config(name = "accent")]
//!     pub secondary_color: Option<String>,
//!
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - ColorsLayer::FIELDS.primary_color -> FieldPath("colors.primaryColor")
//! // - ColorsLayer::FIELDS.secondary_color -> FieldPath("colors.accent")
//! // - ColorsLayer::KEYS -> &["primaryColor", "accent"]
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for top level)
//! - `#[config(rename_all = "camelCase")]` - Key casing, mirrors serde
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and KEYS
//! - `#[config(name = "x")]` - Custom key name
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ColorsLayer` → `colors`
//! - `HighlightConfig` → `highlight`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and KEYS.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
