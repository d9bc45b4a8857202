use super::{assemble, object};
use crate::fields;
use crate::models::{ComponentsConfig, ContentBlockConfig, Fields, RepeatLimits};
use crate::validators;
use avo_types::ContentBlockType;
use serde_json::json;

pub fn heading(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({ "children": "", "type": "h2", "align": "center" })),
        Fields::new()
            .with("children", fields::required_text_input("Titel"))
            .with("type", fields::heading_type("Stijl"))
            .with("align", fields::align("Uitlijning")),
    );
    assemble(
        ContentBlockType::Heading,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn intro(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({ "title": "", "content": "", "align": "center" })),
        Fields::new()
            .with("title", fields::required_text_input("Titel"))
            .with("content", fields::wysiwyg("Tekst"))
            .with("align", fields::align("Uitlijning")),
    );
    assemble(
        ContentBlockType::Intro,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn rich_text(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({ "content": "" })),
        Fields::new().with("content", fields::required_wysiwyg("Tekst")),
    );
    assemble(
        ContentBlockType::RichText,
        position,
        components,
        json!({ "maxTextWidth": "" }),
        Fields::new().with(
            "maxTextWidth",
            fields::text_input("Maximale tekstbreedte").with_prop("placeholder", json!("800px")),
        ),
    )
}

pub fn rich_text_two_columns(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({ "content": "" })),
        2,
        Fields::new().with("content", fields::required_wysiwyg("Kolom")),
        RepeatLimits::exactly(2),
    );
    assemble(
        ContentBlockType::RichTextTwoColumns,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn quote(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({
            "quote": "",
            "authorName": "",
            "authorInitials": "",
            "authorImage": "",
        })),
        Fields::new()
            .with(
                "quote",
                fields::text_area("Quote").with_validator(validators::required),
            )
            .with("authorName", fields::text_input("Naam auteur"))
            .with("authorInitials", fields::text_input("Initialen auteur"))
            .with("authorImage", fields::image_upload("Afbeelding auteur")),
    );
    assemble(
        ContentBlockType::Quote,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

/// Newsletter-style "Klaar" header: a date plus up to three titles
pub fn klaar(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({ "title": "" })),
        1,
        Fields::new().with("title", fields::required_text_input("Titel")),
        RepeatLimits::new(Some(1), Some(3)),
    );
    assemble(
        ContentBlockType::Klaar,
        position,
        components,
        json!({ "date": "" }),
        Fields::new().with(
            "date",
            fields::text_input("Datum")
                .with_prop("placeholder", json!("dd/mm/jjjj"))
                .with_validator(validators::required),
        ),
    )
}
