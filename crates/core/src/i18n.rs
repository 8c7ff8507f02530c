//! Translation lookup
//!
//! Pages and components resolve user-visible strings through [`Translate`]
//! so the catalogue itself stays an external concern.

use std::collections::HashMap;

pub trait Translate: Send + Sync {
    /// Resolve a dotted translation key, e.g. `common.surveys`
    fn t(&self, key: &str) -> String;
}

/// Translator that echoes the key back, handy when no catalogue is loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translate for KeyTranslator {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

/// In-memory catalogue for a single locale
///
/// Missing keys fall back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a catalogue from a nested JSON document, flattening nested
    /// objects into dotted keys.
    pub fn from_json(locale: impl Into<String>, json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let mut catalog = Self::new(locale);
        flatten_into(&mut catalog.entries, String::new(), &value);
        Ok(catalog)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Translate for Catalog {
    fn t(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (segment, child) in map {
                let key = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten_into(entries, key, child);
            }
        }
        serde_json::Value::String(text) => {
            entries.insert(prefix, text.clone());
        }
        // Non-string leaves are not translations
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_translator_echoes() {
        assert_eq!(KeyTranslator.t("common.surveys"), "common.surveys");
    }

    #[test]
    fn test_catalog_flattens_nested_keys() {
        let catalog = Catalog::from_json(
            "en-US",
            r#"{"common": {"surveys": "Surveys", "profile": "Profile"}, "count": 3}"#,
        )
        .unwrap();

        assert_eq!(catalog.locale(), "en-US");
        assert_eq!(catalog.t("common.surveys"), "Surveys");
        assert_eq!(catalog.t("common.profile"), "Profile");
        assert_eq!(catalog.t("count"), "count");
        assert_eq!(catalog.t("common.missing"), "common.missing");
    }

    #[test]
    fn test_catalog_rejects_invalid_json() {
        assert!(Catalog::from_json("en-US", "{not json").is_err());
    }
}
