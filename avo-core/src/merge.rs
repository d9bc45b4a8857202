//! Merging persisted state over factory defaults.
//!
//! Rules:
//! - object + object: merged key by key, recursively; keys only present in
//!   the default keep the default
//! - anything else: the persisted value wins, arrays included (a persisted
//!   array replaces the default array, it is never merged element-wise)
//! - a persisted `null` is a value and replaces the default

use crate::models::StateMap;
use serde_json::Value;

/// Merge a persisted value over a default value
pub fn merge_defaults(default: &Value, persisted: &Value) -> Value {
    match (default, persisted) {
        (Value::Object(default), Value::Object(persisted)) => {
            Value::Object(merge_maps(default, persisted))
        }
        (_, persisted) => persisted.clone(),
    }
}

/// Merge a persisted state map over a default state map
pub fn merge_maps(default: &StateMap, persisted: &StateMap) -> StateMap {
    let mut merged = default.clone();
    for (key, value) in persisted {
        let next = match default.get(key) {
            Some(default_value) => merge_defaults(default_value, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_keep_defaults() {
        let merged = merge_defaults(
            &json!({"children": "", "type": "h2", "align": "center"}),
            &json!({"children": "Hallo"}),
        );
        assert_eq!(
            merged,
            json!({"children": "Hallo", "type": "h2", "align": "center"})
        );
    }

    #[test]
    fn test_nested_objects_merge() {
        let merged = merge_defaults(
            &json!({"padding": {"top": "top", "bottom": "bottom"}}),
            &json!({"padding": {"top": "none"}}),
        );
        assert_eq!(merged, json!({"padding": {"top": "none", "bottom": "bottom"}}));
    }

    #[test]
    fn test_arrays_replace() {
        let merged = merge_defaults(
            &json!({"userGroupIds": [1, 2, 3]}),
            &json!({"userGroupIds": [4]}),
        );
        assert_eq!(merged, json!({"userGroupIds": [4]}));

        let merged = merge_defaults(&json!([{"a": 1, "b": 2}]), &json!([{"a": 5}]));
        assert_eq!(merged, json!([{"a": 5}]));
    }

    #[test]
    fn test_null_and_type_changes_replace() {
        assert_eq!(
            merge_defaults(&json!({"action": {"type": "ITEM"}}), &json!({"action": null})),
            json!({"action": null})
        );
        assert_eq!(
            merge_defaults(&json!({"x": {"nested": true}}), &json!({"x": "flat"})),
            json!({"x": "flat"})
        );
    }

    #[test]
    fn test_unknown_persisted_keys_survive() {
        let merged = merge_defaults(&json!({"a": 1}), &json!({"legacy": "kept"}));
        assert_eq!(merged, json!({"a": 1, "legacy": "kept"}));
    }
}
