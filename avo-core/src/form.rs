//! Generic form renderer.
//!
//! Walks the field schemas of a block and produces one editor per field,
//! per repeated item for repeated component state. Change handling runs the
//! field's validator, records its messages per field and hands the value to
//! the caller, which owns the state container.

use crate::error::ContentBlockError;
use crate::models::{
    ComponentState, ContentBlockConfig, FieldSchema, FormGroupType, RepeatLimits, StateMap,
};
use crate::slug::element_id;
use avo_types::{ContentBlockType, EditorType};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One editor, ready to mount
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedField {
    pub key: String,
    pub label: String,
    pub editor_type: EditorType,

    /// Schema editor props plus the generated `id`
    pub editor_props: StateMap,

    pub value: Value,
    pub errors: Vec<String>,
}

/// The editors of one state object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGroup {
    pub form_group: FormGroupType,
    pub repetition_index: Option<usize>,
    pub fields: Vec<RenderedField>,
}

/// Edit form of a whole block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockForm {
    pub block_type: ContentBlockType,
    pub name: String,
    pub position: usize,

    /// One group per item of repeated state, a single group otherwise
    pub components: Vec<RenderedGroup>,

    pub block: RenderedGroup,
    pub limits: Option<RepeatLimits>,
    pub can_add_item: bool,
    pub can_remove_item: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ErrorKey {
    group: FormGroupType,
    index: Option<usize>,
    key: String,
}

impl ErrorKey {
    fn new(group: FormGroupType, key: &str, index: Option<usize>) -> Self {
        Self {
            group,
            index,
            key: key.to_string(),
        }
    }

    fn label(&self) -> String {
        match self.index {
            Some(i) => format!("{}.{}[{}]", self.group, self.key, i),
            None => format!("{}.{}", self.group, self.key),
        }
    }
}

/// Validation errors of one block's form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    errors: BTreeMap<ErrorKey, Vec<String>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the edit form of a block with the current errors
    pub fn render(&self, config: &ContentBlockConfig) -> BlockForm {
        let position = config.position();

        let components = config
            .components
            .state
            .entries()
            .into_iter()
            .map(|(index, state)| {
                self.render_group(config, FormGroupType::Components, state, index, position)
            })
            .collect();
        let block = self.render_group(
            config,
            FormGroupType::Block,
            &config.block.state,
            None,
            position,
        );

        let len = config.components.state.len();
        let limits = config.components.limits;
        let (can_add_item, can_remove_item) = match (&config.components.state, limits) {
            (ComponentState::Repeated(_), Some(limits)) => {
                (limits.allows_add(len), limits.allows_remove(len))
            }
            (ComponentState::Repeated(_), None) => (true, len > 0),
            (ComponentState::Single(_), _) => (false, false),
        };

        BlockForm {
            block_type: config.block_type,
            name: config.name.clone(),
            position,
            components,
            block,
            limits: config.components.limits,
            can_add_item,
            can_remove_item,
        }
    }

    fn render_group(
        &self,
        config: &ContentBlockConfig,
        group: FormGroupType,
        state: &StateMap,
        index: Option<usize>,
        position: usize,
    ) -> RenderedGroup {
        let fields = config
            .fields(group)
            .iter()
            .map(|(key, schema)| {
                let mut editor_props = schema.editor_props.clone();
                editor_props.insert(
                    "id".to_string(),
                    Value::String(element_id(group.as_str(), position, key, index)),
                );
                RenderedField {
                    key: key.to_string(),
                    label: schema.label.clone(),
                    editor_type: schema.editor_type,
                    editor_props,
                    value: state.get(key).cloned().unwrap_or(Value::Null),
                    errors: self.errors(group, key, index).to_vec(),
                }
            })
            .collect();

        RenderedGroup {
            form_group: group,
            repetition_index: index,
            fields,
        }
    }

    /// Handle an editor's change event
    ///
    /// Unwraps `{ value }` option objects of select-like editors, validates
    /// the value, records the outcome and forwards the value to `on_change`.
    /// Returns the validation messages for this field.
    pub fn change<F>(
        &mut self,
        config: &ContentBlockConfig,
        group: FormGroupType,
        key: &str,
        value: Value,
        index: Option<usize>,
        mut on_change: F,
    ) -> Result<Vec<String>, ContentBlockError>
    where
        F: FnMut(FormGroupType, &str, Value, Option<usize>),
    {
        let schema = config
            .fields(group)
            .get(key)
            .ok_or_else(|| ContentBlockError::UnknownField {
                block_type: config.block_type,
                group,
                key: key.to_string(),
            })?;
        check_slot(config, group, index)?;

        let value = unwrap_option(schema, value);
        let errors = schema.validate(&value);
        self.record(ErrorKey::new(group, key, index), errors.clone());

        on_change(group, key, value, index);
        Ok(errors)
    }

    fn record(&mut self, key: ErrorKey, errors: Vec<String>) {
        if errors.is_empty() {
            self.errors.remove(&key);
        } else {
            self.errors.insert(key, errors);
        }
    }

    /// Re-run every validator against the current state
    ///
    /// Returns the number of fields with errors.
    pub fn validate_all(&mut self, config: &ContentBlockConfig) -> usize {
        self.errors.clear();

        for (index, state) in config.components.state.entries() {
            self.validate_group(config, FormGroupType::Components, state, index);
        }
        self.validate_group(config, FormGroupType::Block, &config.block.state, None);

        self.errors.len()
    }

    fn validate_group(
        &mut self,
        config: &ContentBlockConfig,
        group: FormGroupType,
        state: &StateMap,
        index: Option<usize>,
    ) {
        for (key, schema) in config.fields(group).iter() {
            let value = state.get(key).unwrap_or(&Value::Null);
            self.record(ErrorKey::new(group, key, index), schema.validate(value));
        }
    }

    /// Messages recorded for one field
    pub fn errors(&self, group: FormGroupType, key: &str, index: Option<usize>) -> &[String] {
        self.errors
            .get(&ErrorKey::new(group, key, index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Every recorded error, labelled `group.key[index]`
    pub fn messages(&self) -> Vec<(String, Vec<String>)> {
        self.errors
            .iter()
            .map(|(key, errors)| (key.label(), errors.clone()))
            .collect()
    }

    /// Drop the errors of a removed item and shift later items down
    pub fn forget_item(&mut self, removed: usize) {
        let errors = std::mem::take(&mut self.errors);
        for (mut key, messages) in errors {
            match key.index {
                Some(i) if key.group == FormGroupType::Components && i == removed => continue,
                Some(i) if key.group == FormGroupType::Components && i > removed => {
                    key.index = Some(i - 1);
                }
                _ => {}
            }
            self.errors.insert(key, messages);
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

fn check_slot(
    config: &ContentBlockConfig,
    group: FormGroupType,
    index: Option<usize>,
) -> Result<(), ContentBlockError> {
    match (group, &config.components.state, index) {
        (FormGroupType::Block, _, None) => Ok(()),
        (FormGroupType::Components, ComponentState::Single(_), None) => Ok(()),
        (FormGroupType::Components, ComponentState::Repeated(items), Some(i)) if i < items.len() => {
            Ok(())
        }
        (FormGroupType::Components, ComponentState::Repeated(_), None) => {
            Err(ContentBlockError::MissingRepetitionIndex(config.block_type))
        }
        (_, state, Some(i)) => Err(ContentBlockError::RepetitionIndex {
            index: i,
            len: state.len(),
        }),
    }
}

/// Select-like editors emit `{ value, label }`; the state stores the value
fn unwrap_option(schema: &FieldSchema, value: Value) -> Value {
    if !schema.editor_type.emits_option() {
        return value;
    }
    match value {
        Value::Object(mut option) if option.contains_key("value") => {
            option.remove("value").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BlockRegistry;
    use serde_json::json;

    #[test]
    fn test_render_heading_form() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Heading, 2).unwrap();
        let form = FormState::new().render(&config);

        assert_eq!(form.components.len(), 1);
        assert_eq!(form.components[0].repetition_index, None);
        let keys: Vec<&str> = form.components[0]
            .fields
            .iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(keys, vec!["children", "type", "align"]);

        let title = &form.components[0].fields[0];
        assert_eq!(title.editor_type, EditorType::TextInput);
        assert_eq!(title.editor_props["id"], json!("components-2-children"));
        assert!(!form.can_add_item);
        assert_eq!(form.block.fields[0].key, "backgroundColor");
    }

    #[test]
    fn test_render_repeated_items_carry_index() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Ctas, 0).unwrap();
        let form = FormState::new().render(&config);

        assert_eq!(form.components.len(), 2);
        assert_eq!(form.components[1].repetition_index, Some(1));
        assert_eq!(
            form.components[1].fields[1].editor_props["id"],
            json!("components-0-heading-1")
        );
        assert!(!form.can_add_item);
        assert!(form.can_remove_item);
    }

    #[test]
    fn test_change_unwraps_options_and_forwards() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Heading, 0).unwrap();
        let mut form = FormState::new();
        let mut forwarded = Vec::new();

        form.change(
            &config,
            FormGroupType::Components,
            "type",
            json!({"label": "H3", "value": "h3"}),
            None,
            |group, key, value, index| forwarded.push((group, key.to_string(), value, index)),
        )
        .unwrap();

        assert_eq!(
            forwarded,
            vec![(FormGroupType::Components, "type".to_string(), json!("h3"), None)]
        );
    }

    #[test]
    fn test_change_records_and_clears_validator_errors() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Heading, 0).unwrap();
        let mut form = FormState::new();

        let errors = form
            .change(&config, FormGroupType::Components, "children", json!(""), None, |_, _, _, _| {})
            .unwrap();
        assert_eq!(errors, vec!["Dit veld is verplicht"]);
        assert_eq!(
            form.errors(FormGroupType::Components, "children", None),
            ["Dit veld is verplicht"]
        );
        assert!(form.has_errors());
        assert_eq!(
            form.render(&config).components[0].fields[0].errors,
            vec!["Dit veld is verplicht"]
        );

        form.change(&config, FormGroupType::Components, "children", json!("Hallo"), None, |_, _, _, _| {})
            .unwrap();
        assert!(!form.has_errors());
    }

    #[test]
    fn test_change_rejects_bad_slots() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Accordions, 0).unwrap();
        let mut form = FormState::new();

        let err = form
            .change(&config, FormGroupType::Components, "title", json!("x"), Some(5), |_, _, _, _| {})
            .unwrap_err();
        assert!(matches!(err, ContentBlockError::RepetitionIndex { index: 5, len: 1 }));

        let err = form
            .change(&config, FormGroupType::Components, "bogus", json!("x"), Some(0), |_, _, _, _| {})
            .unwrap_err();
        assert!(matches!(err, ContentBlockError::UnknownField { .. }));
    }

    #[test]
    fn test_validate_all_and_forget_item() {
        let registry = BlockRegistry::standard();
        let mut config = registry.create(ContentBlockType::Accordions, 0).unwrap();
        config.add_item().unwrap();
        config
            .set_value(FormGroupType::Components, "title", json!("Eerste"), Some(0))
            .unwrap();
        config
            .set_value(FormGroupType::Components, "content", json!("<p>Tekst</p>"), Some(0))
            .unwrap();

        let mut form = FormState::new();
        assert_eq!(form.validate_all(&config), 2);
        assert!(form.errors(FormGroupType::Components, "title", Some(0)).is_empty());
        assert_eq!(form.errors(FormGroupType::Components, "title", Some(1)).len(), 1);

        form.forget_item(0);
        assert_eq!(form.errors(FormGroupType::Components, "title", Some(0)).len(), 1);
        assert!(form.errors(FormGroupType::Components, "title", Some(1)).is_empty());

        let labels: Vec<String> = form.messages().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["components.content[0]", "components.title[0]"]);
    }
}
