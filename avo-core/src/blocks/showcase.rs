use super::{assemble, object};
use crate::fields;
use crate::models::{ComponentsConfig, ContentBlockConfig, FieldSchema, Fields, RepeatLimits};
use crate::validators;
use avo_types::{ContentBlockType, EditorType};
use serde_json::json;

const TAB_STYLES: &[(&str, &str)] = &[("Menubalk", "MENU_BAR"), ("Labels", "ROUNDED_BADGES")];

const ITEM_STYLES: &[(&str, &str)] = &[("Lijst", "LIST"), ("Grid", "GRID"), ("Accordeons", "ACCORDION")];

const ITEMS_PER_PAGE: &[(&str, &str)] = &[("10", "10"), ("20", "20"), ("50", "50")];

/// Paged overview of content pages of one type, optionally split in tabs
/// by content label
pub fn page_overview(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({
            "contentTypeAndTabs": {
                "selectedContentType": "PROJECT",
                "selectedLabels": [],
            },
            "tabStyle": "MENU_BAR",
            "allowMultiple": false,
            "itemStyle": "LIST",
            "showTitle": true,
            "showDescription": true,
            "showDate": false,
            "buttonLabel": "Lees meer",
            "itemsPerPage": "20",
        })),
        Fields::new()
            .with(
                "contentTypeAndTabs",
                FieldSchema::new(
                    "Type van de pagina's die je wil weergeven (optioneel kan je deze ook indelen per categorie)",
                    EditorType::ContentTypeAndLabelsPicker,
                ),
            )
            .with("tabStyle", fields::select("Menu type", TAB_STYLES))
            .with(
                "allowMultiple",
                fields::checkbox("Mag meerdere menu items selecteren"),
            )
            .with("itemStyle", fields::select("Item type", ITEM_STYLES))
            .with("showTitle", fields::checkbox("Toon de titel"))
            .with("showDescription", fields::checkbox("Toon de beschrijving"))
            .with("showDate", fields::checkbox("Toon de datum en categorie"))
            .with("buttonLabel", fields::text_input("Label voor de knop (lijst item)"))
            .with(
                "itemsPerPage",
                fields::select("Items per pagina", ITEMS_PER_PAGE),
            ),
    );
    assemble(
        ContentBlockType::PageOverview,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn projects_spotlight(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({
            "project": null,
            "customImage": "",
            "customTitle": "",
        })),
        3,
        Fields::new()
            .with(
                "project",
                fields::content_picker("Project", &["CONTENT_PAGE"])
                    .with_validator(validators::required_action),
            )
            .with("customImage", fields::image_upload("Aangepaste afbeelding"))
            .with("customTitle", fields::text_input("Aangepaste titel")),
        RepeatLimits::exactly(3),
    );
    assemble(
        ContentBlockType::ProjectsSpotlight,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn spotlight(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::repeated(
        object(json!({
            "image": "",
            "title": "",
            "buttonAction": null,
        })),
        3,
        Fields::new()
            .with("image", fields::required_image_upload("Afbeelding"))
            .with("title", fields::required_text_input("Titel"))
            .with("buttonAction", fields::content_picker("Link", &[])),
        RepeatLimits::exactly(3),
    );
    assemble(
        ContentBlockType::Spotlight,
        position,
        components,
        json!({}),
        Fields::new(),
    )
}

pub fn hero(position: usize) -> ContentBlockConfig {
    let components = ComponentsConfig::single(
        object(json!({
            "title": "",
            "titleColor": fields::WHITE,
            "content": "",
            "contentColor": fields::WHITE,
            "src": "",
            "altText": "",
            "buttonLabel": "",
            "buttonType": "primary",
            "buttonAction": null,
        })),
        Fields::new()
            .with("title", fields::required_text_input("Titel"))
            .with("titleColor", fields::color("Titel kleur"))
            .with("content", fields::text_area("Beschrijving"))
            .with("contentColor", fields::color("Beschrijving kleur"))
            .with("src", fields::required_image_upload("Achtergrondafbeelding"))
            .with("altText", fields::text_input("Alt-tekst"))
            .with("buttonLabel", fields::text_input("Knop tekst"))
            .with("buttonType", fields::button_type("Knop type"))
            .with("buttonAction", fields::content_picker("Knop-actie", &[])),
    );
    assemble(
        ContentBlockType::Hero,
        position,
        components,
        json!({ "headerBackgroundColor": "#0F171D" }),
        Fields::new(),
    )
}
