use super::{assemble, object};
use crate::fields;
use crate::models::{ComponentsConfig, ContentBlockConfig, Fields, RepeatLimits};
use crate::validators;
use avo_types::ContentBlockType;
use serde_json::json;

pub fn buttons(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({
            "type": "primary",
            "label": "",
            "icon": "",
            "buttonAction": null,
        })),
        1,
        Fields::new()
            .with("type", fields::button_type("Type"))
            .with("label", fields::required_text_input("Tekst"))
            .with("icon", fields::icon_picker("Icoon"))
            .with("buttonAction", fields::content_picker("Knop-actie", &[])),
        RepeatLimits::new(Some(1), Some(3)),
    );
    assemble(
        ContentBlockType::Buttons,
        position,
        components,
        json!({ "align": "center" }),
        Fields::new().with("align", fields::align("Uitlijning")),
    )
}

pub fn ctas(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({
            "headingType": "h2",
            "heading": "",
            "content": "",
            "buttonType": "secondary",
            "buttonLabel": "",
            "buttonIcon": "",
            "buttonAction": null,
        })),
        2,
        Fields::new()
            .with("headingType", fields::heading_type("Titel stijl"))
            .with("heading", fields::required_text_input("Titel"))
            .with("content", fields::wysiwyg("Tekst"))
            .with("buttonType", fields::button_type("Knop type"))
            .with("buttonLabel", fields::text_input("Knop tekst"))
            .with("buttonIcon", fields::icon_picker("Knop icoon"))
            .with("buttonAction", fields::content_picker("Knop-actie", &[])),
        RepeatLimits::new(Some(1), Some(2)),
    );
    assemble(
        ContentBlockType::Ctas,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

/// Row of buttons jumping to anchors on the same page
pub fn anchor_links(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({
            "label": "",
            "type": "secondary",
            "buttonAction": null,
        })),
        1,
        Fields::new()
            .with("label", fields::required_text_input("Tekst"))
            .with("type", fields::button_type("Type"))
            .with(
                "buttonAction",
                fields::content_picker("Anker", &["ANCHOR_LINK"])
                    .with_validator(validators::required_action),
            ),
        RepeatLimits::new(Some(1), None),
    );
    assemble(
        ContentBlockType::AnchorLinks,
        position,
        components,
        json!({ "align": "center", "hasDividers": true }),
        Fields::new()
            .with("align", fields::align("Uitlijning"))
            .with("hasDividers", fields::checkbox("Scheidingslijnen tonen")),
    )
}

pub fn accordions(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({ "title": "", "content": "" })),
        1,
        Fields::new()
            .with("title", fields::required_text_input("Titel"))
            .with("content", fields::required_wysiwyg("Inhoud")),
        RepeatLimits::new(Some(1), None),
    );
    assemble(
        ContentBlockType::Accordions,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}
