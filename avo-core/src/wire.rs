//! Conversion between persisted content block rows and in-memory configs.
//!
//! Persisted state is always merged over the current factory defaults, so
//! fields introduced after a page was saved come back with their default
//! value instead of missing.

use crate::error::ContentBlockError;
use crate::merge::merge_maps;
use crate::models::{
    ComponentState, ContentBlockConfig, StateMap, BLOCK_BOOKKEEPING_KEYS, BLOCK_TYPE_KEY,
    POSITION_KEY,
};
use crate::registry::BlockRegistry;
use avo_types::{ContentBlockId, ContentId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `variables` column of a persisted block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlockVariables {
    /// Object for single state, array of objects for repeated state
    #[serde(default)]
    pub component_state: Value,

    #[serde(default)]
    pub block_state: StateMap,
}

/// One persisted content block row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlockSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContentBlockId>,

    pub position: usize,

    pub content_block_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<ContentId>,

    pub variables: ContentBlockVariables,
}

/// Serialize one config into its persisted row
///
/// `blockType` and `position` move out of the block state into the row's
/// own columns; everything else nests under `variables`.
pub fn to_wire(config: &ContentBlockConfig, content_id: Option<ContentId>) -> ContentBlockSchema {
    let block_state = config
        .block
        .state
        .iter()
        .filter(|(key, _)| !BLOCK_BOOKKEEPING_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    ContentBlockSchema {
        id: config.id,
        position: config.position(),
        content_block_type: config.block_type.as_str().to_string(),
        content_id,
        variables: ContentBlockVariables {
            component_state: config.components.state.to_value(),
            block_state,
        },
    }
}

/// Serialize a page's blocks in list order, renumbering positions
pub fn to_wire_list(
    configs: &[ContentBlockConfig],
    content_id: Option<ContentId>,
) -> Vec<ContentBlockSchema> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let mut row = to_wire(config, content_id);
            row.position = index;
            row
        })
        .collect()
}

/// Parse persisted rows into configs, ordered by position
///
/// A row whose type is not in the registry fails the whole parse.
pub fn from_wire(
    registry: &BlockRegistry,
    rows: &[ContentBlockSchema],
) -> Result<Vec<ContentBlockConfig>, ContentBlockError> {
    let mut ordered: Vec<&ContentBlockSchema> = rows.iter().collect();
    ordered.sort_by_key(|row| row.position);

    let configs = ordered
        .into_iter()
        .map(|row| parse_row(registry, row))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Parsed {} content blocks", configs.len());
    Ok(configs)
}

fn parse_row(
    registry: &BlockRegistry,
    row: &ContentBlockSchema,
) -> Result<ContentBlockConfig, ContentBlockError> {
    let factory = registry.factory_by_tag(&row.content_block_type)?;
    let mut config = factory(row.position);

    let mut block_state = merge_maps(&config.block.state, &row.variables.block_state);
    block_state.insert(
        BLOCK_TYPE_KEY.to_string(),
        Value::String(config.block_type.as_str().to_string()),
    );
    block_state.insert(POSITION_KEY.to_string(), Value::from(row.position));
    config.block.state = block_state;

    config.components.state = merge_component_state(&config, row)?;
    config.id = row.id;

    Ok(config)
}

fn merge_component_state(
    config: &ContentBlockConfig,
    row: &ContentBlockSchema,
) -> Result<ComponentState, ContentBlockError> {
    let invalid = |message: String| ContentBlockError::InvalidRow {
        position: row.position,
        message,
    };

    match (&config.components.state, &row.variables.component_state) {
        (defaults, Value::Null) => Ok(defaults.clone()),
        (ComponentState::Single(defaults), Value::Object(persisted)) => {
            Ok(ComponentState::Single(merge_maps(defaults, persisted)))
        }
        (ComponentState::Repeated(_), Value::Array(persisted)) => {
            let template = config.components.item_default.clone().unwrap_or_default();
            persisted
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(item) => Ok(merge_maps(&template, item)),
                    other => Err(invalid(format!(
                        "item {} of {} is not an object: {}",
                        index, row.content_block_type, other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ComponentState::Repeated)
        }
        (ComponentState::Single(_), other) => Err(invalid(format!(
            "{} expects an object as component state, got {}",
            row.content_block_type,
            json_kind(other)
        ))),
        (ComponentState::Repeated(_), other) => Err(invalid(format!(
            "{} expects a list as component state, got {}",
            row.content_block_type,
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Read rows from a JSON document: either a bare list of rows or a page
/// object carrying them under `content_blocks`
pub fn rows_from_json(json: &str) -> Result<Vec<ContentBlockSchema>, ContentBlockError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Rows(Vec<ContentBlockSchema>),
        Page {
            content_blocks: Vec<ContentBlockSchema>,
        },
    }

    Ok(match serde_json::from_str(json)? {
        Document::Rows(rows) => rows,
        Document::Page { content_blocks } => content_blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use avo_types::ContentBlockType;
    use serde_json::json;

    fn row(position: usize, block_type: &str, component_state: Value) -> ContentBlockSchema {
        ContentBlockSchema {
            id: None,
            position,
            content_block_type: block_type.to_string(),
            content_id: None,
            variables: ContentBlockVariables {
                component_state,
                block_state: StateMap::new(),
            },
        }
    }

    #[test]
    fn test_to_wire_strips_bookkeeping_keys() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Heading, 3).unwrap();
        let wire = to_wire(&config, Some(ContentId(7)));

        assert_eq!(wire.position, 3);
        assert_eq!(wire.content_block_type, "HEADING");
        assert_eq!(wire.content_id, Some(ContentId(7)));
        assert!(!wire.variables.block_state.contains_key("blockType"));
        assert!(!wire.variables.block_state.contains_key("position"));
        assert_eq!(wire.variables.block_state["backgroundColor"], json!("#FFF"));
    }

    #[test]
    fn test_wire_json_shape() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::RichText, 0).unwrap();
        let value = serde_json::to_value(to_wire(&config, None)).unwrap();

        assert_eq!(value["content_block_type"], json!("RICH_TEXT"));
        assert_eq!(value["variables"]["componentState"], json!({"content": ""}));
        assert!(value["variables"]["blockState"].is_object());
        assert!(value.get("id").is_none());
        assert!(value.get("content_id").is_none());
    }

    #[test]
    fn test_from_wire_sorts_stably_by_position() {
        let registry = BlockRegistry::standard();
        let rows = vec![
            row(2, "RICH_TEXT", json!({"content": "c"})),
            row(0, "HEADING", json!({"children": "a"})),
            row(0, "INTRO", json!({"title": "b"})),
        ];
        let configs = from_wire(&registry, &rows).unwrap();
        let types: Vec<ContentBlockType> = configs.iter().map(|c| c.block_type).collect();
        assert_eq!(
            types,
            vec![
                ContentBlockType::Heading,
                ContentBlockType::Intro,
                ContentBlockType::RichText
            ]
        );
    }

    #[test]
    fn test_repeated_items_get_new_defaults() {
        let registry = BlockRegistry::standard();
        let rows = vec![row(0, "ACCORDIONS", json!([{"title": "Eén"}, {"title": "Twee"}]))];
        let configs = from_wire(&registry, &rows).unwrap();

        match &configs[0].components.state {
            ComponentState::Repeated(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1]["title"], json!("Twee"));
                assert_eq!(items[1]["content"], json!(""));
            }
            other => panic!("expected repeated state, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let registry = BlockRegistry::standard();
        let err = from_wire(&registry, &[row(0, "HEADING", json!([]))]).unwrap_err();
        assert!(matches!(err, ContentBlockError::InvalidRow { position: 0, .. }));

        let err = from_wire(&registry, &[row(1, "ACCORDIONS", json!({"title": "x"}))]).unwrap_err();
        assert!(matches!(err, ContentBlockError::InvalidRow { position: 1, .. }));

        let err = from_wire(&registry, &[row(0, "ACCORDIONS", json!(["x"]))]).unwrap_err();
        assert!(matches!(err, ContentBlockError::InvalidRow { .. }));
    }

    #[test]
    fn test_missing_component_state_uses_defaults() {
        let registry = BlockRegistry::standard();
        let configs = from_wire(&registry, &[row(0, "SPOTLIGHT", Value::Null)]).unwrap();
        assert_eq!(configs[0].components.state.len(), 3);
    }

    #[test]
    fn test_rows_from_json_accepts_page_or_list() {
        let list = r#"[{"position": 0, "content_block_type": "HEADING", "variables": {}}]"#;
        assert_eq!(rows_from_json(list).unwrap().len(), 1);

        let page = r#"{"title": "Over ons", "content_blocks": [
            {"id": 5, "position": 0, "content_block_type": "HEADING",
             "variables": {"componentState": {"children": "Hallo"}, "blockState": {}}}
        ]}"#;
        let rows = rows_from_json(page).unwrap();
        assert_eq!(rows[0].id, Some(ContentBlockId(5)));
        assert_eq!(rows[0].variables.component_state["children"], json!("Hallo"));
    }
}
