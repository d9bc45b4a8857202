//! Generic preview renderer.
//!
//! Turns a block's component state and block state into the props of the
//! display component for its type. Repeatable types receive their items
//! under `elements`; other types get their component state spread over the
//! block props. Button actions of navigable types are resolved to links.

mod header;

pub use header::{HeaderBand, LayoutHost, MeasureTrigger, HEADER_BACKGROUND_KEY};

use crate::error::ContentBlockError;
use crate::models::{
    ButtonAction, ContentBlockConfig, StateMap, BLOCK_BOOKKEEPING_KEYS, BLOCK_TYPE_KEY, POSITION_KEY,
};
use crate::routing::Navigator;
use avo_types::ContentBlockType;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Display component drawing a block on the public page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayComponent {
    Accordions,
    AnchorLinks,
    Buttons,
    Ctas,
    Heading,
    Hero,
    IFrame,
    Image,
    ImageGrid,
    Intro,
    Klaar,
    MediaGrid,
    MediaPlayer,
    MediaPlayerTitleTextButton,
    PageOverview,
    ProjectsSpotlight,
    Quote,
    RichText,
    Spotlight,
}

impl DisplayComponent {
    pub fn for_block(block_type: ContentBlockType) -> Self {
        match block_type {
            ContentBlockType::Accordions => DisplayComponent::Accordions,
            ContentBlockType::AnchorLinks => DisplayComponent::AnchorLinks,
            ContentBlockType::Buttons => DisplayComponent::Buttons,
            ContentBlockType::Ctas => DisplayComponent::Ctas,
            ContentBlockType::Heading => DisplayComponent::Heading,
            ContentBlockType::Hero => DisplayComponent::Hero,
            ContentBlockType::IFrame => DisplayComponent::IFrame,
            ContentBlockType::Image => DisplayComponent::Image,
            ContentBlockType::ImageGrid => DisplayComponent::ImageGrid,
            ContentBlockType::Intro => DisplayComponent::Intro,
            ContentBlockType::Klaar => DisplayComponent::Klaar,
            ContentBlockType::MediaGrid => DisplayComponent::MediaGrid,
            ContentBlockType::MediaPlayer => DisplayComponent::MediaPlayer,
            ContentBlockType::MediaPlayerTitleTextButton => {
                DisplayComponent::MediaPlayerTitleTextButton
            }
            ContentBlockType::PageOverview => DisplayComponent::PageOverview,
            ContentBlockType::ProjectsSpotlight => DisplayComponent::ProjectsSpotlight,
            ContentBlockType::Quote => DisplayComponent::Quote,
            // Two columns are rich text with a list of column states
            ContentBlockType::RichText | ContentBlockType::RichTextTwoColumns => {
                DisplayComponent::RichText
            }
            ContentBlockType::Spotlight => DisplayComponent::Spotlight,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisplayComponent::Accordions => "BlockAccordions",
            DisplayComponent::AnchorLinks => "BlockAnchorLinks",
            DisplayComponent::Buttons => "BlockButtons",
            DisplayComponent::Ctas => "BlockCTAs",
            DisplayComponent::Heading => "BlockHeading",
            DisplayComponent::Hero => "BlockHero",
            DisplayComponent::IFrame => "BlockIFrame",
            DisplayComponent::Image => "BlockImage",
            DisplayComponent::ImageGrid => "BlockImageGrid",
            DisplayComponent::Intro => "BlockIntro",
            DisplayComponent::Klaar => "BlockKlaar",
            DisplayComponent::MediaGrid => "BlockMediaGrid",
            DisplayComponent::MediaPlayer => "BlockMediaPlayer",
            DisplayComponent::MediaPlayerTitleTextButton => "BlockMediaPlayerTitleTextButton",
            DisplayComponent::PageOverview => "BlockPageOverview",
            DisplayComponent::ProjectsSpotlight => "BlockProjectsSpotlight",
            DisplayComponent::Quote => "BlockQuote",
            DisplayComponent::RichText => "BlockRichText",
            DisplayComponent::Spotlight => "BlockSpotlight",
        }
    }
}

/// Props for one display component (or one element of it)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewProps {
    pub values: StateMap,

    /// Resolved hrefs keyed by the state key holding the button action
    pub links: BTreeMap<String, String>,
}

impl PreviewProps {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value of a prop, empty when absent or not a string
    pub fn text(&self, key: &str) -> &str {
        self.values.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn link(&self, key: &str) -> Option<&str> {
        self.links.get(key).map(String::as_str)
    }
}

/// A block ready to hand to its display component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewBlock {
    pub block_type: ContentBlockType,
    pub position: usize,
    pub component: DisplayComponent,
    pub props: PreviewProps,

    /// Items of repeatable types
    pub elements: Option<Vec<PreviewProps>>,

    pub header: Option<HeaderBand>,
}

pub struct PreviewRenderer<'a> {
    navigator: &'a dyn Navigator,
}

impl<'a> PreviewRenderer<'a> {
    pub fn new(navigator: &'a dyn Navigator) -> Self {
        Self { navigator }
    }

    /// Render one block from its two state containers
    pub fn render(
        &self,
        component_state: &Value,
        block_state: &StateMap,
    ) -> Result<PreviewBlock, ContentBlockError> {
        let tag = block_state
            .get(BLOCK_TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or(ContentBlockError::MissingBlockType)?;
        let block_type = ContentBlockType::from_tag(tag).ok_or_else(|| {
            tracing::error!("Cannot preview unknown content block type {}", tag);
            ContentBlockError::UnknownBlockType(tag.to_string())
        })?;
        let position = block_state
            .get(POSITION_KEY)
            .and_then(Value::as_u64)
            .unwrap_or_default() as usize;
        let navigable = block_type.is_navigable();

        let mut values: StateMap = block_state
            .iter()
            .filter(|(key, _)| !BLOCK_BOOKKEEPING_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let elements = if block_type.is_repeatable() {
            let items = component_state
                .as_array()
                .ok_or_else(|| ContentBlockError::InvalidRow {
                    position,
                    message: format!("{} expects a list of items", block_type),
                })?;
            let elements = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let values = item.as_object().cloned().ok_or_else(|| {
                        ContentBlockError::InvalidRow {
                            position,
                            message: format!("item {} of {} is not an object", index, block_type),
                        }
                    })?;
                    Ok(self.props(values, navigable))
                })
                .collect::<Result<Vec<_>, ContentBlockError>>()?;
            Some(elements)
        } else {
            let state = component_state
                .as_object()
                .ok_or_else(|| ContentBlockError::InvalidRow {
                    position,
                    message: format!("{} expects a single state object", block_type),
                })?;
            // Component props win over block props
            values.extend(state.iter().map(|(k, v)| (k.clone(), v.clone())));
            None
        };

        tracing::debug!(
            "Previewing {} at position {} with {}",
            block_type,
            position,
            DisplayComponent::for_block(block_type).name()
        );

        Ok(PreviewBlock {
            block_type,
            position,
            component: DisplayComponent::for_block(block_type),
            header: HeaderBand::from_block_state(block_state),
            props: self.props(values, navigable),
            elements,
        })
    }

    pub fn render_config(&self, config: &ContentBlockConfig) -> Result<PreviewBlock, ContentBlockError> {
        self.render(&config.components.state.to_value(), &config.block.state)
    }

    /// Render the blocks of a page in order
    pub fn render_page(&self, blocks: &[ContentBlockConfig]) -> Result<PagePreview, ContentBlockError> {
        let blocks = blocks
            .iter()
            .map(|config| self.render_config(config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PagePreview { blocks })
    }

    fn props(&self, values: StateMap, navigable: bool) -> PreviewProps {
        let links = if navigable {
            self.resolve_links(&values)
        } else {
            BTreeMap::new()
        };
        PreviewProps { values, links }
    }

    fn resolve_links(&self, values: &StateMap) -> BTreeMap<String, String> {
        values
            .iter()
            .filter_map(|(key, value)| {
                let action = ButtonAction::from_value(value)?;
                let href = self.navigator.href(&action)?;
                Some((key.clone(), href))
            })
            .collect()
    }
}

/// Rendered page with its header band caches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PagePreview {
    pub blocks: Vec<PreviewBlock>,
}

impl PagePreview {
    /// Mark every header band stale
    pub fn invalidate(&mut self, trigger: MeasureTrigger) {
        for band in self.blocks.iter_mut().filter_map(|b| b.header.as_mut()) {
            band.invalidate(trigger);
        }
    }

    /// Measure stale header bands; returns how many were measured
    pub fn sync(&mut self, host: &dyn LayoutHost) -> usize {
        let mut measured = 0;
        for (index, block) in self.blocks.iter_mut().enumerate() {
            if let Some(band) = block.header.as_mut() {
                if band.sync(host, index) {
                    measured += 1;
                }
            }
        }
        measured
    }

    /// Re-render one block after a field change
    pub fn update_block(
        &mut self,
        renderer: &PreviewRenderer<'_>,
        index: usize,
        config: &ContentBlockConfig,
    ) -> Result<(), ContentBlockError> {
        let mut block = renderer.render_config(config)?;
        let Some(slot) = self.blocks.get_mut(index) else {
            return Err(ContentBlockError::RepetitionIndex {
                index,
                len: self.blocks.len(),
            });
        };

        // Keep the last measured height on screen until the next sync
        if let (Some(old), Some(new)) = (slot.header.take(), block.header.as_mut()) {
            let color = std::mem::take(&mut new.color);
            *new = old;
            new.color = color;
            new.invalidate(MeasureTrigger::StateChange);
        }
        *slot = block;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormGroupType;
    use crate::registry::BlockRegistry;
    use crate::routing::Router;
    use serde_json::json;

    fn state(value: Value) -> StateMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_every_type_has_a_component() {
        let router = Router::default();
        let renderer = PreviewRenderer::new(&router);
        let registry = BlockRegistry::standard();
        for block_type in ContentBlockType::ALL {
            let config = registry.create(block_type, 0).unwrap();
            let block = renderer.render_config(&config).unwrap();
            assert_eq!(block.component, DisplayComponent::for_block(block_type));
            assert_eq!(block.elements.is_some(), block_type.is_repeatable());
        }
        assert_eq!(
            DisplayComponent::for_block(ContentBlockType::RichTextTwoColumns).name(),
            "BlockRichText"
        );
    }

    #[test]
    fn test_heading_props_spread_over_block_props() {
        let router = Router::default();
        let renderer = PreviewRenderer::new(&router);
        let block = renderer
            .render(
                &json!({"children": "Hello", "type": "h2", "align": "center"}),
                &state(json!({
                    "blockType": "HEADING",
                    "position": 4,
                    "backgroundColor": "#FFF",
                    "align": "left",
                })),
            )
            .unwrap();

        assert_eq!(block.component.name(), "BlockHeading");
        assert_eq!(block.position, 4);
        assert_eq!(block.props.text("children"), "Hello");
        assert_eq!(block.props.text("align"), "center");
        assert_eq!(block.props.text("backgroundColor"), "#FFF");
        assert!(block.props.get("blockType").is_none());
        assert!(block.props.get("position").is_none());
        assert!(block.header.is_none());
    }

    #[test]
    fn test_navigable_elements_get_links() {
        let router = Router::default();
        let renderer = PreviewRenderer::new(&router);
        let mut config = BlockRegistry::standard()
            .create(ContentBlockType::Buttons, 0)
            .unwrap();
        config
            .set_value(
                FormGroupType::Components,
                "buttonAction",
                json!({"type": "ITEM", "value": "abc"}),
                Some(0),
            )
            .unwrap();

        let block = renderer.render_config(&config).unwrap();
        let elements = block.elements.unwrap();
        assert_eq!(elements[0].link("buttonAction"), Some("/item/abc"));
    }

    #[test]
    fn test_unknown_and_missing_block_type() {
        let router = Router::default();
        let renderer = PreviewRenderer::new(&router);
        let err = renderer
            .render(&json!({}), &state(json!({"blockType": "CAROUSEL"})))
            .unwrap_err();
        assert!(matches!(err, ContentBlockError::UnknownBlockType(tag) if tag == "CAROUSEL"));

        let err = renderer.render(&json!({}), &StateMap::new()).unwrap_err();
        assert!(matches!(err, ContentBlockError::MissingBlockType));
    }

    #[test]
    fn test_items_must_be_objects() {
        let router = Router::default();
        let renderer = PreviewRenderer::new(&router);
        let err = renderer
            .render(
                &json!([{"label": "Een"}, "twee"]),
                &state(json!({"blockType": "BUTTONS", "position": 2})),
            )
            .unwrap_err();
        assert!(matches!(err, ContentBlockError::InvalidRow { position: 2, .. }));
    }

    #[test]
    fn test_update_block_keeps_height_but_marks_stale() {
        struct Host;
        impl LayoutHost for Host {
            fn header_height(&self, _block: usize) -> Option<f64> {
                Some(80.0)
            }
        }

        let router = Router::default();
        let renderer = PreviewRenderer::new(&router);
        let mut config = BlockRegistry::standard()
            .create(ContentBlockType::Hero, 0)
            .unwrap();
        let mut page = renderer.render_page(std::slice::from_ref(&config)).unwrap();
        assert_eq!(page.sync(&Host), 1);
        assert_eq!(page.sync(&Host), 0);

        config
            .set_value(FormGroupType::Components, "title", json!("Welkom"), None)
            .unwrap();
        page.update_block(&renderer, 0, &config).unwrap();
        let band = page.blocks[0].header.as_ref().unwrap();
        assert!(band.is_stale());
        assert_eq!(band.height(), Some(80.0));
        assert_eq!(page.sync(&Host), 1);

        page.invalidate(MeasureTrigger::Resize);
        assert_eq!(page.sync(&Host), 1);
        assert_eq!(page.blocks[0].header.as_ref().unwrap().measurements(), 3);
    }
}
