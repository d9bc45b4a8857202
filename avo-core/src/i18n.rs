//! Key/value translation lookup for display strings.

use crate::config::ConfigError;
use std::collections::HashMap;
use std::path::Path;

/// Translation lookup: a pure function of a static dictionary
pub trait Translate {
    /// Translate `key`, replacing `{{name}}` placeholders
    fn t(&self, key: &str, interpolations: &[(&str, String)]) -> String;
}

/// Dutch messages used when no dictionary overrides them
const BUILTIN: &[(&str, &str)] = &[
    (
        "content-block.limit.maximum",
        "Je kan maximaal {{max}} items toevoegen",
    ),
    (
        "content-block.limit.minimum",
        "Er moeten minstens {{min}} items overblijven",
    ),
    ("content-block.limit.no-such-item", "Item {{index}} bestaat niet"),
    (
        "content-block.limit.not-repeatable",
        "Blok {{blockType}} heeft geen herhaalbare items",
    ),
    (
        "content-page.save.success",
        "De content pagina is opgeslagen",
    ),
    (
        "content-page.save.failed",
        "Het opslaan van de content pagina is mislukt",
    ),
    (
        "content-page.save.invalid",
        "Er zijn nog fouten in de content blokken, kijk deze na voor je opslaat",
    ),
    (
        "content-page.load.failed",
        "Het ophalen van de content blokken is mislukt",
    ),
];

/// Dictionary of translated strings keyed by dotted path
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// The built-in Dutch messages
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Parse a YAML dictionary; nested mappings are flattened into dotted keys
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);
        Ok(Self { entries })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&contents)?)
    }

    /// Built-in messages overridden by an optional dictionary file
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builtin = Self::builtin();
        match path {
            Some(path) => {
                tracing::debug!("Loading translations from {:?}", path);
                Ok(builtin.overlay(Self::from_file(path)?))
            }
            None => Ok(builtin),
        }
    }

    /// Entries of `other` win over entries of `self`
    pub fn overlay(mut self, other: Translations) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &serde_yaml::Value, out: &mut HashMap<String, String>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, value) in map {
                if let Some(key) = yaml_scalar(key) {
                    flatten(&join(&key), value, out);
                }
            }
        }
        other => {
            if let Some(text) = yaml_scalar(other) {
                out.insert(prefix.to_string(), text);
            }
        }
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Translate for Translations {
    fn t(&self, key: &str, interpolations: &[(&str, String)]) -> String {
        let template = self.entries.get(key).map(String::as_str).unwrap_or(key);
        interpolations
            .iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{{{}}}}}", name), value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_with_interpolation() {
        let i18n = Translations::builtin();
        assert_eq!(
            i18n.t("content-block.limit.maximum", &[("max", "3".to_string())]),
            "Je kan maximaal 3 items toevoegen"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let i18n = Translations::builtin();
        assert_eq!(i18n.t("admin.unknown", &[]), "admin.unknown");
    }

    #[test]
    fn test_nested_yaml_overlay() {
        let overrides = Translations::from_yaml_str(
            r#"
content-page:
  save:
    success: "Opgeslagen!"
menu:
  items: 4
"#,
        )
        .unwrap();
        let i18n = Translations::builtin().overlay(overrides);

        assert_eq!(i18n.t("content-page.save.success", &[]), "Opgeslagen!");
        assert_eq!(i18n.t("menu.items", &[]), "4");
        assert_eq!(
            i18n.t("content-page.save.failed", &[]),
            "Het opslaan van de content pagina is mislukt"
        );
    }
}
