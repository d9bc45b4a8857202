//! HTML for block edit forms, one control per editor type.

use crate::html_escape;
use avo_core::form::{BlockForm, RenderedField, RenderedGroup};
use avo_core::EditorType;
use serde_json::Value;

/// Render a block's edit form
pub fn render_form(form: &BlockForm) -> String {
    let mut html = format!(
        "<form class=\"c-content-block-form\" data-block-type=\"{}\" data-position=\"{}\">\n",
        form.block_type.as_str(),
        form.position
    );
    html.push_str(&format!("  <h2>{}</h2>\n", html_escape(&form.name)));

    for group in &form.components {
        html.push_str(&render_group(group));
    }
    if form.limits.is_some() {
        html.push_str(&format!(
            "  <div class=\"c-content-block-form__items\">\n    <button type=\"button\" data-action=\"add-item\"{}>Voeg toe</button>\n    <button type=\"button\" data-action=\"remove-item\"{}>Verwijder</button>\n  </div>\n",
            disabled(!form.can_add_item),
            disabled(!form.can_remove_item)
        ));
    }

    html.push_str(&render_group(&form.block));
    html.push_str("</form>\n");
    html
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

fn render_group(group: &RenderedGroup) -> String {
    let index = group
        .repetition_index
        .map(|i| format!(" data-repetition-index=\"{}\"", i))
        .unwrap_or_default();
    let mut html = format!(
        "  <fieldset class=\"c-form-group c-form-group--{}\"{}>\n",
        group.form_group, index
    );
    for field in &group.fields {
        html.push_str(&render_field(field));
    }
    html.push_str("  </fieldset>\n");
    html
}

fn render_field(field: &RenderedField) -> String {
    let id = field
        .editor_props
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(field.key.as_str());
    let id = html_escape(id);
    let name = html_escape(&field.key);

    let control = match field.editor_type {
        EditorType::TextInput => input("text", &id, &name, &text_value(&field.value), field),
        EditorType::TextArea => format!(
            "<textarea id=\"{id}\" name=\"{name}\">{}</textarea>",
            html_escape(&text_value(&field.value))
        ),
        EditorType::Wysiwyg => format!(
            "<textarea id=\"{id}\" name=\"{name}\" data-editor=\"wysiwyg\">{}</textarea>",
            html_escape(&text_value(&field.value))
        ),
        EditorType::Select
        | EditorType::AlignSelect
        | EditorType::ColorSelect
        | EditorType::IconPicker => select(&id, &name, field, false),
        EditorType::MultiSelect => select(&id, &name, field, true),
        EditorType::PaddingSelect => padding(&id, &name, &field.value),
        EditorType::FileUpload => input("url", &id, &name, &text_value(&field.value), field),
        EditorType::ContentPicker => content_picker(&id, &name, field),
        EditorType::ContentTypeAndLabelsPicker => {
            json_control(&id, &name, "content-type-and-labels", &field.value)
        }
        EditorType::Checkbox => format!(
            "<input type=\"checkbox\" id=\"{id}\" name=\"{name}\"{}>",
            if field.value.as_bool().unwrap_or(false) {
                " checked"
            } else {
                ""
            }
        ),
        EditorType::UserGroupSelect => json_control(&id, &name, "user-groups", &field.value),
    };

    let mut html = format!(
        "    <div class=\"c-form-field{}\">\n      <label for=\"{id}\">{}</label>\n      {}\n",
        if field.errors.is_empty() {
            ""
        } else {
            " c-form-field--error"
        },
        html_escape(&field.label),
        control
    );
    for error in &field.errors {
        html.push_str(&format!(
            "      <p class=\"c-form-field__error\">{}</p>\n",
            html_escape(error)
        ));
    }
    html.push_str("    </div>\n");
    html
}

fn text_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .first()
            .map(text_value)
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

fn input(kind: &str, id: &str, name: &str, value: &str, field: &RenderedField) -> String {
    let placeholder = field
        .editor_props
        .get("placeholder")
        .and_then(Value::as_str)
        .map(|p| format!(" placeholder=\"{}\"", html_escape(p)))
        .unwrap_or_default();
    format!(
        "<input type=\"{kind}\" id=\"{id}\" name=\"{name}\" value=\"{}\"{}>",
        html_escape(value),
        placeholder
    )
}

fn select(id: &str, name: &str, field: &RenderedField, multiple: bool) -> String {
    let selected: Vec<String> = match &field.value {
        Value::Array(items) => items.iter().map(text_value).collect(),
        other => vec![text_value(other)],
    };
    let mut html = format!(
        "<select id=\"{id}\" name=\"{name}\"{}>",
        if multiple { " multiple" } else { "" }
    );
    let options = field
        .editor_props
        .get("options")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for option in options {
        let value = option.get("value").map(text_value).unwrap_or_default();
        let label = option.get("label").map(text_value).unwrap_or_default();
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            html_escape(&value),
            if selected.contains(&value) {
                " selected"
            } else {
                ""
            },
            html_escape(&label)
        ));
    }
    html.push_str("</select>");
    html
}

fn padding(id: &str, name: &str, value: &Value) -> String {
    let side = |key: &str| {
        html_escape(
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )
    };
    format!(
        "<span id=\"{id}\" data-editor=\"padding\"><input name=\"{name}.top\" value=\"{}\"><input name=\"{name}.bottom\" value=\"{}\"></span>",
        side("top"),
        side("bottom")
    )
}

fn content_picker(id: &str, name: &str, field: &RenderedField) -> String {
    let kind = field
        .value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let value = field.value.get("value").map(text_value).unwrap_or_default();
    let allowed = field
        .editor_props
        .get("allowedTypes")
        .map(|types| format!(" data-allowed-types=\"{}\"", html_escape(&types.to_string())))
        .unwrap_or_default();
    format!(
        "<span id=\"{id}\" data-editor=\"content-picker\"{allowed}><input name=\"{name}.type\" value=\"{}\"><input name=\"{name}.value\" value=\"{}\"></span>",
        html_escape(kind),
        html_escape(&value)
    )
}

/// Structured values the page edits through a dedicated widget
fn json_control(id: &str, name: &str, editor: &str, value: &Value) -> String {
    format!(
        "<input type=\"hidden\" id=\"{id}\" name=\"{name}\" data-editor=\"{editor}\" value=\"{}\">",
        html_escape(&value.to_string())
    )
}
