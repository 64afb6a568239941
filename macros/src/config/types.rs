//! Naming helpers for Config derive macro.

/// Key casing applied to field names, mirroring serde's `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Snake,
    Camel,
}

impl KeyCase {
    pub fn parse(rule: &str) -> Option<Self> {
        match rule {
            "snake_case" => Some(Self::Snake),
            "camelCase" => Some(Self::Camel),
            _ => None,
        }
    }

    pub fn apply(self, field: &str) -> String {
        match self {
            Self::Snake => field.to_string(),
            Self::Camel => to_camel_case(field),
        }
    }
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("Layer")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_camel_case(&to_snake_case(name))
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case to camelCase
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("primary_color"), "primaryColor");
        assert_eq!(to_camel_case("on_page_nav"), "onPageNav");
        assert_eq!(to_camel_case("title"), "title");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("ColorsLayer"), "colors");
        assert_eq!(infer_section("HighlightConfig"), "highlight");
        assert_eq!(infer_section("HeaderLink"), "headerLink");
    }
}
