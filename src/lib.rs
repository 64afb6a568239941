//! Site configuration profiles for IHMC documentation websites.
//!
//! A [`ProfileSet`] holds a shared base layer and named overrides; loading a
//! profile merges, validates and finalizes it into the immutable
//! [`SiteConfig`] record the documentation renderer consumes.
//!
//! ```ignore
//! use sitecfg::{DateTimeUtc, load_site_configuration};
//!
//! let config = load_site_configuration("project", DateTimeUtc::now())?;
//! assert_eq!(config.base_path, "/euclid/");
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod render;
pub mod utils;

pub use config::{
    ConfigDiagnostics, ConfigError, ProfileSet, SiteConfig, SiteLayer, format_copyright,
    load_site_configuration,
};
pub use utils::date::DateTimeUtc;
