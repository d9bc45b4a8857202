//! Field validators.
//!
//! Every validator returns an empty list for a conforming value and one or
//! more human-readable messages otherwise.

use crate::slug::slugify;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>|&nbsp;").unwrap())
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap())
}

fn text_of(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

/// Plain text must not be blank
pub fn required(value: &Value) -> Vec<String> {
    if text_of(value).trim().is_empty() {
        vec!["Dit veld is verplicht".to_string()]
    } else {
        vec![]
    }
}

/// Rich text must contain text once markup is stripped
pub fn required_rich_text(value: &Value) -> Vec<String> {
    let stripped = tag_regex().replace_all(text_of(value), "");
    if stripped.trim().is_empty() {
        vec!["Tekst is verplicht".to_string()]
    } else {
        vec![]
    }
}

/// A file upload holds a url (or a list with at least one url)
pub fn required_file(value: &Value) -> Vec<String> {
    let present = match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => items.iter().any(|v| !text_of(v).trim().is_empty()),
        _ => false,
    };
    if present {
        vec![]
    } else {
        vec!["Een afbeelding is verplicht".to_string()]
    }
}

/// Embedded page source: required, absolute, and https
pub fn iframe_src(value: &Value) -> Vec<String> {
    let text = text_of(value).trim();
    let mut errors = Vec::new();
    if text.is_empty() {
        errors.push("Url is verplicht".to_string());
        return errors;
    }
    if !url_regex().is_match(text) {
        errors.push("Dit is geen geldige url".to_string());
    }
    if !text.starts_with("https://") {
        errors.push("De url moet met https:// beginnen".to_string());
    }
    errors
}

/// Optional anchor id: must already be in slug form
pub fn anchor_id(value: &Value) -> Vec<String> {
    let text = text_of(value);
    if text.is_empty() || slugify(text) == text {
        vec![]
    } else {
        vec![format!(
            "Een anker mag enkel kleine letters, cijfers en koppeltekens bevatten (bv. \"{}\")",
            slugify(text)
        )]
    }
}

/// A content picker must have a target
pub fn required_action(value: &Value) -> Vec<String> {
    let empty = match value.get("value") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    };
    if empty {
        vec!["Een link is verplicht".to_string()]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required() {
        assert!(required(&json!("Hallo")).is_empty());
        assert_eq!(required(&json!("   ")), vec!["Dit veld is verplicht"]);
        assert_eq!(required(&Value::Null).len(), 1);
    }

    #[test]
    fn test_required_rich_text_ignores_markup() {
        assert!(required_rich_text(&json!("<p>Inhoud</p>")).is_empty());
        assert_eq!(required_rich_text(&json!("<p>&nbsp;</p>")).len(), 1);
    }

    #[test]
    fn test_iframe_src_reports_every_problem() {
        assert!(iframe_src(&json!("https://www.youtube.com/embed/x")).is_empty());
        assert_eq!(iframe_src(&json!("")), vec!["Url is verplicht"]);
        assert_eq!(
            iframe_src(&json!("hetarchief")),
            vec!["Dit is geen geldige url", "De url moet met https:// beginnen"]
        );
        assert_eq!(
            iframe_src(&json!("http://example.com")),
            vec!["De url moet met https:// beginnen"]
        );
    }

    #[test]
    fn test_anchor_id() {
        assert!(anchor_id(&json!("")).is_empty());
        assert!(anchor_id(&json!("over-ons")).is_empty());
        let errors = anchor_id(&json!("Over ons"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("over-ons"));
    }

    #[test]
    fn test_required_file_and_action() {
        assert!(required_file(&json!(["https://cdn/x.png"])).is_empty());
        assert_eq!(required_file(&json!([])).len(), 1);
        assert!(required_action(&json!({"type": "ITEM", "value": "abc"})).is_empty());
        assert_eq!(required_action(&json!({"type": "ITEM", "value": ""})).len(), 1);
        assert_eq!(required_action(&Value::Null).len(), 1);
    }
}
