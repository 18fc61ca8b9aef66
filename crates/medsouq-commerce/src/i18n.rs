//! Translation lookup contract.
//!
//! The storefront resolves every user-visible string through a
//! [`Translator`]. Keys and variable names are the contract; where the
//! strings live is up to the host application.

use std::collections::HashMap;

/// Opaque translation lookup collaborator.
pub trait Translator: Send + Sync {
    /// Resolve a translation key to a display string.
    fn t(&self, key: &str) -> String;

    /// Resolve a translation key with `{{name}}`-style variables.
    fn t_with(&self, key: &str, vars: &HashMap<String, String>) -> String {
        interpolate(&self.t(key), vars)
    }
}

/// Replace `{{name}}` placeholders with variable values.
///
/// Unknown placeholders are replaced with the empty string.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let token = after[..end].trim();
                if let Some(value) = vars.get(token) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Translator that echoes keys back, for tests and development.
#[derive(Debug, Clone, Default)]
pub struct KeyEchoTranslator;

impl Translator for KeyEchoTranslator {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_interpolate_replaces_variables() {
        let result = interpolate("Added {{name}} to cart", &vars(&[("name", "Gauze")]));
        assert_eq!(result, "Added Gauze to cart");
    }

    #[test]
    fn test_interpolate_missing_variable_becomes_empty() {
        let result = interpolate("Hello {{who}}", &vars(&[]));
        assert_eq!(result, "Hello ");
    }

    #[test]
    fn test_interpolate_unterminated_placeholder_kept() {
        let result = interpolate("broken {{name", &vars(&[("name", "x")]));
        assert_eq!(result, "broken {{name");
    }

    #[test]
    fn test_key_echo() {
        let t = KeyEchoTranslator;
        assert_eq!(t.t("toasts.itemRemoved"), "toasts.itemRemoved");
    }
}
