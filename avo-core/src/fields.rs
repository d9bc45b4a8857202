//! Field schema constructors and the option lists shared by block types.

use crate::models::FieldSchema;
use crate::validators;
use avo_types::EditorType;
use serde_json::{json, Value};

/// Transparent background, never rendered as a color band
pub const TRANSPARENT: &str = "transparent";

pub const WHITE: &str = "#FFF";

/// Background palette offered by color selects
pub const COLORS: &[(&str, &str)] = &[
    ("Wit", WHITE),
    ("Lichtgrijs", "#F8F8F8"),
    ("Grijs", "#EDEFF2"),
    ("Zachtblauw", "#D6DEE5"),
    ("Zeegroen", "#57C2A0"),
    ("Teal", "#1D637A"),
    ("Nachtblauw", "#0F171D"),
    ("Transparant", TRANSPARENT),
];

pub const HEADING_TYPES: &[(&str, &str)] = &[
    ("H1", "h1"),
    ("H2", "h2"),
    ("H3", "h3"),
    ("H4", "h4"),
];

pub const ALIGN_OPTIONS: &[(&str, &str)] = &[
    ("Links", "left"),
    ("Gecentreerd", "center"),
    ("Rechts", "right"),
];

pub const BUTTON_TYPES: &[(&str, &str)] = &[
    ("Primair", "primary"),
    ("Secundair", "secondary"),
    ("Secundair (invers)", "secondary-i"),
    ("Tertiair", "tertiary"),
    ("Link", "link"),
    ("Inline link", "inline-link"),
];

pub const WIDTH_OPTIONS: &[(&str, &str)] = &[
    ("Paginabreedte", "full-width"),
    ("Groot", "500px"),
    ("Middelgroot", "400px"),
    ("Klein", "200px"),
];

/// Option objects as select editors expect them
pub fn options(pairs: &[(&str, &str)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|(label, value)| json!({ "label": label, "value": value }))
            .collect(),
    )
}

pub fn text_input(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::TextInput)
}

pub fn required_text_input(label: &str) -> FieldSchema {
    text_input(label).with_validator(validators::required)
}

pub fn text_area(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::TextArea).with_prop("height", json!("auto"))
}

pub fn wysiwyg(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::Wysiwyg).with_prop(
        "controls",
        json!(["bold", "italic", "link", "list-ul", "list-ol", "separator", "remove-styles"]),
    )
}

pub fn required_wysiwyg(label: &str) -> FieldSchema {
    wysiwyg(label).with_validator(validators::required_rich_text)
}

pub fn select(label: &str, pairs: &[(&str, &str)]) -> FieldSchema {
    FieldSchema::new(label, EditorType::Select).with_prop("options", options(pairs))
}

pub fn heading_type(label: &str) -> FieldSchema {
    select(label, HEADING_TYPES)
}

pub fn button_type(label: &str) -> FieldSchema {
    select(label, BUTTON_TYPES)
}

pub fn align(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::AlignSelect).with_prop("options", options(ALIGN_OPTIONS))
}

pub fn color(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::ColorSelect).with_prop("options", options(COLORS))
}

pub fn padding(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::PaddingSelect)
        .with_prop("sizes", json!(["none", "small", "medium", "large", "extra-large"]))
}

/// Image upload into the content-page asset bucket
pub fn image_upload(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::FileUpload)
        .with_prop("assetType", json!("CONTENT_PAGE_IMAGE"))
        .with_prop("allowMulti", json!(false))
}

pub fn required_image_upload(label: &str) -> FieldSchema {
    image_upload(label).with_validator(validators::required_file)
}

/// Picker for routing targets; `allowed` limits the selectable target kinds
pub fn content_picker(label: &str, allowed: &[&str]) -> FieldSchema {
    let picker = FieldSchema::new(label, EditorType::ContentPicker);
    if allowed.is_empty() {
        picker
    } else {
        picker.with_prop("allowedTypes", json!(allowed))
    }
}

pub fn icon_picker(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::IconPicker).with_prop(
        "options",
        options(&[
            ("Geen", ""),
            ("Pijl rechts", "arrow-right"),
            ("Download", "download"),
            ("Zoeken", "search"),
            ("Extern", "external-link"),
            ("Afspelen", "play"),
        ]),
    )
}

pub fn checkbox(label: &str) -> FieldSchema {
    FieldSchema::new(label, EditorType::Checkbox)
}
