//! In-memory content block model: configs, state containers and field schemas.

use crate::error::{ContentBlockError, LimitViolation};
use avo_types::{ContentBlockId, ContentBlockType, EditorType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object holding the values of one state container
pub type StateMap = Map<String, Value>;

/// Validator attached to a field: empty result means the value is valid
pub type Validator = fn(&Value) -> Vec<String>;

/// Block-state key holding the block type tag
pub const BLOCK_TYPE_KEY: &str = "blockType";

/// Block-state key holding the dense 0-based page position
pub const POSITION_KEY: &str = "position";

/// Bookkeeping keys that live in block state but are never display props
pub const BLOCK_BOOKKEEPING_KEYS: [&str; 2] = [BLOCK_TYPE_KEY, POSITION_KEY];

/// Which state container of a block a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormGroupType {
    Components,
    Block,
}

impl FormGroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormGroupType::Components => "components",
            FormGroupType::Block => "block",
        }
    }
}

impl std::fmt::Display for FormGroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one editable property of a state container
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Display label
    pub label: String,

    /// Input control used to edit the value
    pub editor_type: EditorType,

    /// Options passed through to the editor untouched
    pub editor_props: StateMap,

    pub validator: Option<Validator>,
}

impl FieldSchema {
    pub fn new(label: impl Into<String>, editor_type: EditorType) -> Self {
        Self {
            label: label.into(),
            editor_type,
            editor_props: StateMap::new(),
            validator: None,
        }
    }

    pub fn with_prop(mut self, key: &str, value: Value) -> Self {
        self.editor_props.insert(key.to_string(), value);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Run the validator, if any, against a value
    pub fn validate(&self, value: &Value) -> Vec<String> {
        self.validator.map(|v| v(value)).unwrap_or_default()
    }
}

impl PartialEq for FieldSchema {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.editor_type == other.editor_type
            && self.editor_props == other.editor_props
            && self.validator.is_some() == other.validator.is_some()
    }
}

/// Ordered field schemas of one state container, keyed by state key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Vec<(String, FieldSchema)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing an existing field with the same key in place
    pub fn with(mut self, key: &str, schema: FieldSchema) -> Self {
        self.insert(key, schema);
        self
    }

    pub fn insert(&mut self, key: &str, schema: FieldSchema) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| k == key) {
            slot.1 = schema;
        } else {
            self.0.push((key.to_string(), schema));
        }
    }

    /// Append every field of `other`
    pub fn extend(mut self, other: Fields) -> Self {
        for (key, schema) in other.0 {
            self.insert(&key, schema);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldSchema> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.0.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// State of the repeatable inner content of a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentState {
    Repeated(Vec<StateMap>),
    Single(StateMap),
}

impl ComponentState {
    pub fn is_repeated(&self) -> bool {
        matches!(self, ComponentState::Repeated(_))
    }

    /// Number of items (a single state counts as one)
    pub fn len(&self) -> usize {
        match self {
            ComponentState::Repeated(items) => items.len(),
            ComponentState::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items paired with their repetition index (`None` for single state)
    pub fn entries(&self) -> Vec<(Option<usize>, &StateMap)> {
        match self {
            ComponentState::Repeated(items) => {
                items.iter().enumerate().map(|(i, s)| (Some(i), s)).collect()
            }
            ComponentState::Single(state) => vec![(None, state)],
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ComponentState::Repeated(items) => {
                Value::Array(items.iter().cloned().map(Value::Object).collect())
            }
            ComponentState::Single(state) => Value::Object(state.clone()),
        }
    }
}

/// Bounds on the number of repeated items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatLimits {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl RepeatLimits {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn exactly(count: usize) -> Self {
        Self::new(Some(count), Some(count))
    }

    pub fn allows_add(&self, current: usize) -> bool {
        self.max.map_or(true, |max| current < max)
    }

    pub fn allows_remove(&self, current: usize) -> bool {
        current > 0 && self.min.map_or(true, |min| current > min)
    }
}

/// The `{ state, fields }` pair describing a block's inner content
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentsConfig {
    pub state: ComponentState,
    pub fields: Fields,

    /// Only set for repeated state
    pub limits: Option<RepeatLimits>,

    /// Default values of a freshly added item (repeated state only)
    pub item_default: Option<StateMap>,
}

impl ComponentsConfig {
    pub fn single(state: StateMap, fields: Fields) -> Self {
        Self {
            state: ComponentState::Single(state),
            fields,
            limits: None,
            item_default: None,
        }
    }

    pub fn repeated(item: StateMap, count: usize, fields: Fields, limits: RepeatLimits) -> Self {
        Self {
            state: ComponentState::Repeated(vec![item.clone(); count]),
            fields,
            limits: Some(limits),
            item_default: Some(item),
        }
    }
}

/// The `{ state, fields }` pair describing a block's wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct BlockConfig {
    pub state: StateMap,
    pub fields: Fields,
}

/// One block placed on a content page
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlockConfig {
    /// Absent until the block was saved once
    pub id: Option<ContentBlockId>,

    /// Display name of the block type
    pub name: String,

    pub block_type: ContentBlockType,
    pub components: ComponentsConfig,
    pub block: BlockConfig,
}

impl ContentBlockConfig {
    pub fn position(&self) -> usize {
        self.block
            .state
            .get(POSITION_KEY)
            .and_then(Value::as_u64)
            .unwrap_or_default() as usize
    }

    pub fn set_position(&mut self, position: usize) {
        self.block
            .state
            .insert(POSITION_KEY.to_string(), Value::from(position));
    }

    pub fn fields(&self, group: FormGroupType) -> &Fields {
        match group {
            FormGroupType::Components => &self.components.fields,
            FormGroupType::Block => &self.block.fields,
        }
    }

    /// Current value of a field
    pub fn value(&self, group: FormGroupType, key: &str, index: Option<usize>) -> Option<&Value> {
        match group {
            FormGroupType::Block => self.block.state.get(key),
            FormGroupType::Components => match (&self.components.state, index) {
                (ComponentState::Single(state), None) => state.get(key),
                (ComponentState::Repeated(items), Some(i)) => items.get(i)?.get(key),
                _ => None,
            },
        }
    }

    /// Store a new value for a declared field
    pub fn set_value(
        &mut self,
        group: FormGroupType,
        key: &str,
        value: Value,
        index: Option<usize>,
    ) -> Result<(), ContentBlockError> {
        if !self.fields(group).contains(key) {
            return Err(ContentBlockError::UnknownField {
                block_type: self.block_type,
                group,
                key: key.to_string(),
            });
        }

        let target = match group {
            FormGroupType::Block => &mut self.block.state,
            FormGroupType::Components => match (&mut self.components.state, index) {
                (ComponentState::Single(state), None) => state,
                (ComponentState::Repeated(items), Some(i)) => {
                    let len = items.len();
                    items
                        .get_mut(i)
                        .ok_or(ContentBlockError::RepetitionIndex { index: i, len })?
                }
                (ComponentState::Single(_), Some(i)) => {
                    return Err(ContentBlockError::RepetitionIndex { index: i, len: 1 });
                }
                (ComponentState::Repeated(_), None) => {
                    return Err(ContentBlockError::MissingRepetitionIndex(self.block_type));
                }
            },
        };

        target.insert(key.to_string(), value);
        Ok(())
    }

    /// Append a default item to repeated component state
    ///
    /// Returns the index of the new item.
    pub fn add_item(&mut self) -> Result<usize, LimitViolation> {
        let limits = self.components.limits.unwrap_or_default();
        let template = self.components.item_default.clone().unwrap_or_default();
        let ComponentState::Repeated(items) = &mut self.components.state else {
            return Err(LimitViolation::NotRepeatable(self.block_type));
        };

        if !limits.allows_add(items.len()) {
            return Err(LimitViolation::Maximum {
                max: limits.max.unwrap_or(items.len()),
            });
        }

        items.push(template);
        Ok(items.len() - 1)
    }

    /// Remove one item from repeated component state
    pub fn remove_item(&mut self, index: usize) -> Result<(), LimitViolation> {
        let limits = self.components.limits.unwrap_or_default();
        let ComponentState::Repeated(items) = &mut self.components.state else {
            return Err(LimitViolation::NotRepeatable(self.block_type));
        };

        if index >= items.len() {
            return Err(LimitViolation::NoSuchItem { index });
        }
        if !limits.allows_remove(items.len()) {
            return Err(LimitViolation::Minimum {
                min: limits.min.unwrap_or_default(),
            });
        }

        items.remove(index);
        Ok(())
    }
}

/// Kind of target a button routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonActionType {
    ContentPage,
    InternalLink,
    ExternalLink,
    AnchorLink,
    Item,
    Collection,
    Bundle,
    SearchQuery,
}

/// Routing target picked in a content picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonAction {
    #[serde(rename = "type")]
    pub action_type: ButtonActionType,

    pub value: Value,
}

impl ButtonAction {
    /// Read an action from a state value; empty pickers yield `None`
    pub fn from_value(value: &Value) -> Option<Self> {
        let action: ButtonAction = serde_json::from_value(value.clone()).ok()?;
        match &action.value {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            _ => Some(action),
        }
    }

    /// The picked value as a string, whatever its JSON type
    pub fn value_str(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn accordion() -> ContentBlockConfig {
        let item = json!({"title": "", "content": ""})
            .as_object()
            .cloned()
            .unwrap();
        let fields = Fields::new()
            .with("title", FieldSchema::new("Titel", EditorType::TextInput))
            .with("content", FieldSchema::new("Inhoud", EditorType::Wysiwyg));
        ContentBlockConfig {
            id: None,
            name: "Accordeons".into(),
            block_type: ContentBlockType::Accordions,
            components: ComponentsConfig::repeated(
                item,
                1,
                fields,
                RepeatLimits::new(Some(1), Some(2)),
            ),
            block: BlockConfig {
                state: StateMap::new(),
                fields: Fields::new(),
            },
        }
    }

    #[test]
    fn test_repeat_limits() {
        let limits = RepeatLimits::new(Some(1), Some(3));
        assert!(limits.allows_add(2));
        assert!(!limits.allows_add(3));
        assert!(limits.allows_remove(2));
        assert!(!limits.allows_remove(1));
        assert!(RepeatLimits::default().allows_add(100));
        assert!(!RepeatLimits::default().allows_remove(0));
    }

    #[test]
    fn test_add_and_remove_items_respect_limits() {
        let mut config = accordion();
        assert_eq!(config.add_item(), Ok(1));
        assert_eq!(
            config.add_item(),
            Err(LimitViolation::Maximum { max: 2 })
        );
        assert_eq!(config.components.state.len(), 2);

        assert_eq!(config.remove_item(0), Ok(()));
        assert_eq!(
            config.remove_item(0),
            Err(LimitViolation::Minimum { min: 1 })
        );
        assert_eq!(config.components.state.len(), 1);
    }

    #[test]
    fn test_set_value_targets_repetition_slot() {
        let mut config = accordion();
        config.add_item().unwrap();
        config
            .set_value(FormGroupType::Components, "title", json!("Tweede"), Some(1))
            .unwrap();

        assert_eq!(
            config.value(FormGroupType::Components, "title", Some(1)),
            Some(&json!("Tweede"))
        );
        assert_eq!(
            config.value(FormGroupType::Components, "title", Some(0)),
            Some(&json!(""))
        );
    }

    #[test]
    fn test_set_value_rejects_undeclared_field() {
        let mut config = accordion();
        let err = config
            .set_value(FormGroupType::Components, "nope", json!(1), Some(0))
            .unwrap_err();
        assert!(matches!(err, ContentBlockError::UnknownField { .. }));

        let err = config
            .set_value(FormGroupType::Components, "title", json!("x"), None)
            .unwrap_err();
        assert!(matches!(err, ContentBlockError::MissingRepetitionIndex(_)));
    }

    #[test]
    fn test_button_action_from_value() {
        let action = ButtonAction::from_value(&json!({"type": "ITEM", "value": "abc123"}));
        assert_eq!(
            action,
            Some(ButtonAction {
                action_type: ButtonActionType::Item,
                value: json!("abc123"),
            })
        );
        assert_eq!(
            ButtonAction::from_value(&json!({"type": "ITEM", "value": ""})),
            None
        );
        assert_eq!(ButtonAction::from_value(&json!("plain")), None);
    }
}
