//! Block type factories.
//!
//! Each block type has a factory `fn(position) -> ContentBlockConfig`
//! producing fresh default state plus the field schemas of both state
//! containers. Factories are pure: two calls return independent configs
//! that only differ in the injected position.

mod actions;
mod media;
mod showcase;
mod text;

use crate::fields::{self, TRANSPARENT, WHITE};
use crate::models::{
    BlockConfig, ComponentsConfig, ContentBlockConfig, FieldSchema, Fields, StateMap,
};
use crate::validators;
use avo_types::{ContentBlockType, EditorType};
use serde_json::{json, Value};

/// Produces the default config of one block type at a position
pub type BlockFactory = fn(usize) -> ContentBlockConfig;

/// Factory of every block type
pub fn factory_for(block_type: ContentBlockType) -> BlockFactory {
    match block_type {
        ContentBlockType::Accordions => actions::accordions,
        ContentBlockType::AnchorLinks => actions::anchor_links,
        ContentBlockType::Buttons => actions::buttons,
        ContentBlockType::Ctas => actions::ctas,
        ContentBlockType::Heading => text::heading,
        ContentBlockType::Hero => showcase::hero,
        ContentBlockType::IFrame => media::iframe,
        ContentBlockType::Image => media::image,
        ContentBlockType::ImageGrid => media::image_grid,
        ContentBlockType::Intro => text::intro,
        ContentBlockType::Klaar => text::klaar,
        ContentBlockType::MediaGrid => media::media_grid,
        ContentBlockType::MediaPlayer => media::media_player,
        ContentBlockType::MediaPlayerTitleTextButton => media::media_player_title_text_button,
        ContentBlockType::PageOverview => showcase::page_overview,
        ContentBlockType::ProjectsSpotlight => showcase::projects_spotlight,
        ContentBlockType::Quote => text::quote,
        ContentBlockType::RichText => text::rich_text,
        ContentBlockType::RichTextTwoColumns => text::rich_text_two_columns,
        ContentBlockType::Spotlight => showcase::spotlight,
    }
}

/// Display name shown in the add-block menu and block headers
pub fn display_name(block_type: ContentBlockType) -> &'static str {
    match block_type {
        ContentBlockType::Accordions => "Accordeons",
        ContentBlockType::AnchorLinks => "Links",
        ContentBlockType::Buttons => "Knoppen",
        ContentBlockType::Ctas => "CTA's",
        ContentBlockType::Heading => "Titel",
        ContentBlockType::Hero => "Hero",
        ContentBlockType::IFrame => "IFrame",
        ContentBlockType::Image => "Afbeelding",
        ContentBlockType::ImageGrid => "Afbeeldingen grid",
        ContentBlockType::Intro => "Intro",
        ContentBlockType::Klaar => "Klaar",
        ContentBlockType::MediaGrid => "Media tegels",
        ContentBlockType::MediaPlayer => "Media-speler",
        ContentBlockType::MediaPlayerTitleTextButton => "Media-speler met titel, tekst en knop",
        ContentBlockType::PageOverview => "Pagina overzicht",
        ContentBlockType::ProjectsSpotlight => "Projecten in de kijker",
        ContentBlockType::Quote => "Quote",
        ContentBlockType::RichText => "Tekst",
        ContentBlockType::RichTextTwoColumns => "Tekst (2 kolommen)",
        ContentBlockType::Spotlight => "In de kijker",
    }
}

/// Unwrap a `json!` object literal into a state map
pub(crate) fn object(value: Value) -> StateMap {
    match value {
        Value::Object(map) => map,
        _ => StateMap::new(),
    }
}

/// Wrapper state every block type starts from
pub fn block_state_defaults(block_type: ContentBlockType, position: usize) -> StateMap {
    object(json!({
        "blockType": block_type.as_str(),
        "position": position,
        "backgroundColor": WHITE,
        "headerBackgroundColor": TRANSPARENT,
        "padding": { "top": "top", "bottom": "bottom" },
        "margin": { "top": "none", "bottom": "none" },
        "anchor": "",
        "fullWidth": false,
        "userGroupIds": [],
    }))
}

/// Wrapper fields every block type exposes
pub fn block_field_defaults() -> Fields {
    Fields::new()
        .with("backgroundColor", fields::color("Achtergrondkleur"))
        .with(
            "headerBackgroundColor",
            fields::color("Achtergrondkleur hoofding"),
        )
        .with("padding", fields::padding("Padding"))
        .with("margin", fields::padding("Marge"))
        .with(
            "anchor",
            fields::text_input("Anker-id").with_validator(validators::anchor_id),
        )
        .with("fullWidth", fields::checkbox("Volledige paginabreedte"))
        .with(
            "userGroupIds",
            FieldSchema::new("Zichtbaar voor", EditorType::UserGroupSelect),
        )
}

/// Assemble a config from its inner content plus block-specific wrapper
/// state and fields layered on the shared defaults
pub(crate) fn assemble(
    block_type: ContentBlockType,
    position: usize,
    components: ComponentsConfig,
    extra_state: Value,
    extra_fields: Fields,
) -> ContentBlockConfig {
    let mut state = block_state_defaults(block_type, position);
    state.extend(object(extra_state));

    ContentBlockConfig {
        id: None,
        name: display_name(block_type).to_string(),
        block_type,
        components,
        block: BlockConfig {
            state,
            fields: block_field_defaults().extend(extra_fields),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentState, BLOCK_BOOKKEEPING_KEYS};

    #[test]
    fn test_factories_are_tagged_and_positioned() {
        for block_type in ContentBlockType::ALL {
            let config = factory_for(block_type)(4);
            assert_eq!(config.block_type, block_type);
            assert_eq!(config.position(), 4);
            assert_eq!(config.block.state["blockType"], json!(block_type.as_str()));
            assert!(config.id.is_none());
        }
    }

    #[test]
    fn test_state_shape_matches_declared_fields() {
        for block_type in ContentBlockType::ALL {
            let config = factory_for(block_type)(0);

            for (_, item) in config.components.state.entries() {
                let mut state_keys: Vec<&str> = item.keys().map(String::as_str).collect();
                let mut field_keys: Vec<&str> = config.components.fields.keys().collect();
                state_keys.sort();
                field_keys.sort();
                assert_eq!(state_keys, field_keys, "components of {}", block_type);
            }

            let mut state_keys: Vec<&str> = config
                .block
                .state
                .keys()
                .map(String::as_str)
                .filter(|k| !BLOCK_BOOKKEEPING_KEYS.contains(k))
                .collect();
            let mut field_keys: Vec<&str> = config.block.fields.keys().collect();
            state_keys.sort();
            field_keys.sort();
            assert_eq!(state_keys, field_keys, "block of {}", block_type);
        }
    }

    #[test]
    fn test_repetition_follows_block_type() {
        for block_type in ContentBlockType::ALL {
            let config = factory_for(block_type)(0);
            let repeated = matches!(config.components.state, ComponentState::Repeated(_));
            assert_eq!(repeated, block_type.is_repeatable(), "{}", block_type);
            assert_eq!(config.components.limits.is_some(), repeated);
            assert_eq!(config.components.item_default.is_some(), repeated);

            if let Some(limits) = config.components.limits {
                let len = config.components.state.len();
                assert!(limits.min.map_or(true, |min| len >= min), "{}", block_type);
                assert!(limits.max.map_or(true, |max| len <= max), "{}", block_type);
            }
        }
    }

    #[test]
    fn test_factories_return_independent_configs() {
        let mut first = factory_for(ContentBlockType::Heading)(0);
        let second = factory_for(ContentBlockType::Heading)(0);
        first.block.state.insert("anchor".into(), json!("gewijzigd"));
        assert_eq!(second.block.state["anchor"], json!(""));
    }
}
