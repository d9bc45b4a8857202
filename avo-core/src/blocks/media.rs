use super::{assemble, object};
use crate::fields::{self, ALIGN_OPTIONS, WIDTH_OPTIONS};
use crate::models::{ComponentsConfig, ContentBlockConfig, Fields, RepeatLimits};
use crate::validators;
use avo_types::ContentBlockType;
use serde_json::json;

const IMAGE_FILL: &[(&str, &str)] = &[
    ("Opvullen", "cover"),
    ("Volledig tonen", "contain"),
    ("Originele grootte", "auto"),
];

const GRID_FORMATS: &[(&str, &str)] = &[
    ("Vierkant (groot)", "squareLarge"),
    ("Vierkant (klein)", "squareSmall"),
    ("4:3", "4:3"),
    ("2:1", "2:1"),
];

pub fn image(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({
            "title": "",
            "text": "",
            "imageSource": "",
            "width": "full-width",
        })),
        Fields::new()
            .with("title", fields::text_input("Titel"))
            .with("text", fields::text_input("Bijschrift"))
            .with("imageSource", fields::required_image_upload("Afbeelding"))
            .with("width", fields::select("Breedte", WIDTH_OPTIONS)),
    );
    assemble(
        ContentBlockType::Image,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn image_grid(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({
            "source": "",
            "title": "",
            "text": "",
            "action": null,
        })),
        1,
        Fields::new()
            .with("source", fields::required_image_upload("Afbeelding"))
            .with("title", fields::text_input("Titel"))
            .with("text", fields::text_input("Tekst"))
            .with("action", fields::content_picker("Link", &[])),
        RepeatLimits::new(Some(1), None),
    );
    assemble(
        ContentBlockType::ImageGrid,
        position,
        components,
        json!({
            "format": "squareLarge",
            "fill": "cover",
            "textAlign": "center",
        }),
        Fields::new()
            .with("format", fields::select("Formaat", GRID_FORMATS))
            .with("fill", fields::select("Zoom", IMAGE_FILL))
            .with("textAlign", fields::select("Tekst uitlijning", ALIGN_OPTIONS)),
    )
}

pub fn iframe(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({ "title": "", "src": "" })),
        Fields::new()
            .with("title", fields::required_text_input("Titel"))
            .with(
                "src",
                fields::text_input("Url").with_validator(validators::iframe_src),
            ),
    );
    assemble(
        ContentBlockType::IFrame,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn media_player(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({
            "title": "",
            "item": null,
            "autoplay": false,
            "width": "full-width",
        })),
        Fields::new()
            .with("title", fields::text_input("Toegankelijkheidstitel"))
            .with(
                "item",
                fields::content_picker("Video of audio item", &["ITEM"])
                    .with_validator(validators::required_action),
            )
            .with("autoplay", fields::checkbox("Automatisch afspelen"))
            .with("width", fields::select("Breedte", WIDTH_OPTIONS)),
    );
    assemble(
        ContentBlockType::MediaPlayer,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn media_player_title_text_button(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({
            "mediaTitle": "",
            "mediaItem": null,
            "mediaAutoplay": false,
            "headingType": "h2",
            "headingTitle": "",
            "content": "",
            "buttonLabel": "",
            "buttonIcon": "",
            "buttonType": "primary",
            "buttonAction": null,
            "align": "left",
        })),
        Fields::new()
            .with("mediaTitle", fields::text_input("Toegankelijkheidstitel"))
            .with(
                "mediaItem",
                fields::content_picker("Video of audio item", &["ITEM"])
                    .with_validator(validators::required_action),
            )
            .with("mediaAutoplay", fields::checkbox("Automatisch afspelen"))
            .with("headingType", fields::heading_type("Titel stijl"))
            .with("headingTitle", fields::required_text_input("Titel"))
            .with("content", fields::wysiwyg("Tekst"))
            .with("buttonLabel", fields::text_input("Knop tekst"))
            .with("buttonIcon", fields::icon_picker("Knop icoon"))
            .with("buttonType", fields::button_type("Knop type"))
            .with("buttonAction", fields::content_picker("Knop-actie", &[]))
            .with("align", fields::align("Uitlijning")),
    );
    assemble(
        ContentBlockType::MediaPlayerTitleTextButton,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

/// Tiles of media items with an optional call-to-action tile
pub fn media_grid(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({ "mediaItem": null })),
        1,
        Fields::new().with(
            "mediaItem",
            fields::content_picker("Item", &["ITEM", "COLLECTION", "BUNDLE"])
                .with_validator(validators::required_action),
        ),
        RepeatLimits::new(Some(1), Some(8)),
    );
    assemble(
        ContentBlockType::MediaGrid,
        position,
        components,
        json!({
            "title": "",
            "buttonLabel": "",
            "buttonAction": null,
            "ctaTitle": "",
            "ctaContent": "",
            "ctaButtonLabel": "",
            "ctaButtonAction": null,
        }),
        Fields::new()
            .with("title", fields::text_input("Titel"))
            .with("buttonLabel", fields::text_input("Knop tekst"))
            .with("buttonAction", fields::content_picker("Knop-actie", &[]))
            .with("ctaTitle", fields::text_input("CTA titel"))
            .with("ctaContent", fields::wysiwyg("CTA tekst"))
            .with("ctaButtonLabel", fields::text_input("CTA knop tekst"))
            .with("ctaButtonAction", fields::content_picker("CTA knop-actie", &[])),
    )
}
