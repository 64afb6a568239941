//! Serialization of a [`SiteConfig`] for the documentation renderer.
//!
//! | Format | Output                                              |
//! |--------|-----------------------------------------------------|
//! | `json` | The record as a JSON object                         |
//! | `js`   | A CommonJS `siteConfig.js` module exporting it      |

use crate::config::SiteConfig;
use crate::utils::date::DateTimeUtc;

/// Render the record as JSON.
pub fn to_json(config: &SiteConfig, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    }
}

/// Render the record as a CommonJS module, the form the renderer loads.
///
/// ```js
/// // Generated by sitecfg (profile `project`, 2024-06-15). Do not edit.
/// const siteConfig = { ... };
///
/// module.exports = siteConfig;
/// ```
pub fn to_js_module(
    config: &SiteConfig,
    profile: &str,
    date: DateTimeUtc,
) -> serde_json::Result<String> {
    let body = to_json(config, true)?;
    Ok(format!(
        "// Generated by {} (profile `{profile}`, {}). Do not edit.\n\
         const siteConfig = {body};\n\
         \n\
         module.exports = siteConfig;\n",
        env!("CARGO_PKG_NAME"),
        date.to_date_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_site_configuration;

    const DATE: DateTimeUtc = DateTimeUtc::from_ymd(2024, 6, 15);

    #[test]
    fn test_json_round_trips_through_value() {
        let config = load_site_configuration("project", DATE).unwrap();
        let compact = to_json(&config, false).unwrap();
        let pretty = to_json(&config, true).unwrap();

        assert!(!compact.contains('\n'));
        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["title"], "Euclid");
    }

    #[test]
    fn test_js_module_shape() {
        let config = load_site_configuration("parent", DATE).unwrap();
        let js = to_js_module(&config, "parent", DATE).unwrap();

        let first = js.lines().next().unwrap();
        assert!(first.starts_with("// Generated by"));
        assert!(first.contains("`parent`"));
        assert!(first.contains("2024-06-15"));
        assert!(js.contains("const siteConfig = {"));
        assert!(js.contains("\"copyright\": \"Copyright © 2024 IHMC Robotics\""));
        assert!(js.ends_with("module.exports = siteConfig;\n"));
    }
}
