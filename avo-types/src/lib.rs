//! Shared types for the AvO content-block model
//!
//! This crate provides the identifiers and tags shared across the
//! workspace: persisted ids, the content block type tag and the editor
//! type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted identifier of a single content block row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentBlockId(pub i64);

impl ContentBlockId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ContentBlockId {
    fn from(id: i64) -> Self {
        ContentBlockId(id)
    }
}

/// Identifier of the content page that owns a list of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ContentId {
    fn from(id: i64) -> Self {
        ContentId(id)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag selecting the editor, preview component and defaults of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentBlockType {
    Accordions,
    AnchorLinks,
    Buttons,
    #[serde(rename = "CTAS")]
    Ctas,
    Heading,
    Hero,
    #[serde(rename = "IFRAME")]
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
    RichTextTwoColumns,
    Spotlight,
}

impl ContentBlockType {
    /// Every block type, in the order the add-block menu lists them
    pub const ALL: [ContentBlockType; 20] = [
        ContentBlockType::Heading,
        ContentBlockType::Intro,
        ContentBlockType::RichText,
        ContentBlockType::RichTextTwoColumns,
        ContentBlockType::Buttons,
        ContentBlockType::Ctas,
        ContentBlockType::Accordions,
        ContentBlockType::AnchorLinks,
        ContentBlockType::Quote,
        ContentBlockType::Image,
        ContentBlockType::ImageGrid,
        ContentBlockType::IFrame,
        ContentBlockType::MediaPlayer,
        ContentBlockType::MediaPlayerTitleTextButton,
        ContentBlockType::MediaGrid,
        ContentBlockType::PageOverview,
        ContentBlockType::ProjectsSpotlight,
        ContentBlockType::Spotlight,
        ContentBlockType::Hero,
        ContentBlockType::Klaar,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentBlockType::Accordions => "ACCORDIONS",
            ContentBlockType::AnchorLinks => "ANCHOR_LINKS",
            ContentBlockType::Buttons => "BUTTONS",
            ContentBlockType::Ctas => "CTAS",
            ContentBlockType::Heading => "HEADING",
            ContentBlockType::Hero => "HERO",
            ContentBlockType::IFrame => "IFRAME",
            ContentBlockType::Image => "IMAGE",
            ContentBlockType::ImageGrid => "IMAGE_GRID",
            ContentBlockType::Intro => "INTRO",
            ContentBlockType::Klaar => "KLAAR",
            ContentBlockType::MediaGrid => "MEDIA_GRID",
            ContentBlockType::MediaPlayer => "MEDIA_PLAYER",
            ContentBlockType::MediaPlayerTitleTextButton => "MEDIA_PLAYER_TITLE_TEXT_BUTTON",
            ContentBlockType::PageOverview => "PAGE_OVERVIEW",
            ContentBlockType::ProjectsSpotlight => "PROJECTS_SPOTLIGHT",
            ContentBlockType::Quote => "QUOTE",
            ContentBlockType::RichText => "RICH_TEXT",
            ContentBlockType::RichTextTwoColumns => "RICH_TEXT_TWO_COLUMNS",
            ContentBlockType::Spotlight => "SPOTLIGHT",
        }
    }

    /// Whether the component state is a list of items passed to the
    /// display component as `elements`
    pub fn is_repeatable(&self) -> bool {
        match self {
            ContentBlockType::Accordions
            | ContentBlockType::AnchorLinks
            | ContentBlockType::Buttons
            | ContentBlockType::Ctas
            | ContentBlockType::ImageGrid
            | ContentBlockType::Klaar
            | ContentBlockType::MediaGrid
            | ContentBlockType::ProjectsSpotlight
            | ContentBlockType::RichTextTwoColumns
            | ContentBlockType::Spotlight => true,
            ContentBlockType::Heading
            | ContentBlockType::Hero
            | ContentBlockType::IFrame
            | ContentBlockType::Image
            | ContentBlockType::Intro
            | ContentBlockType::MediaPlayer
            | ContentBlockType::MediaPlayerTitleTextButton
            | ContentBlockType::PageOverview
            | ContentBlockType::Quote
            | ContentBlockType::RichText => false,
        }
    }

    /// Whether the display component routes button actions and therefore
    /// needs navigation resolved for it
    pub fn is_navigable(&self) -> bool {
        match self {
            ContentBlockType::AnchorLinks
            | ContentBlockType::Buttons
            | ContentBlockType::Ctas
            | ContentBlockType::Hero
            | ContentBlockType::ImageGrid
            | ContentBlockType::MediaGrid
            | ContentBlockType::MediaPlayerTitleTextButton
            | ContentBlockType::ProjectsSpotlight
            | ContentBlockType::Spotlight => true,
            ContentBlockType::Accordions
            | ContentBlockType::Heading
            | ContentBlockType::IFrame
            | ContentBlockType::Image
            | ContentBlockType::Intro
            | ContentBlockType::Klaar
            | ContentBlockType::MediaPlayer
            | ContentBlockType::PageOverview
            | ContentBlockType::Quote
            | ContentBlockType::RichText
            | ContentBlockType::RichTextTwoColumns => false,
        }
    }
}

impl fmt::Display for ContentBlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag selecting which input control edits a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorType {
    TextInput,
    TextArea,
    Wysiwyg,
    Select,
    MultiSelect,
    AlignSelect,
    ColorSelect,
    PaddingSelect,
    FileUpload,
    ContentPicker,
    ContentTypeAndLabelsPicker,
    IconPicker,
    Checkbox,
    UserGroupSelect,
}

impl EditorType {
    /// Select-like editors emit `{ value, label }` option objects instead of
    /// the bare value
    pub fn emits_option(&self) -> bool {
        match self {
            EditorType::Select
            | EditorType::AlignSelect
            | EditorType::ColorSelect
            | EditorType::IconPicker => true,
            EditorType::TextInput
            | EditorType::TextArea
            | EditorType::Wysiwyg
            | EditorType::MultiSelect
            | EditorType::PaddingSelect
            | EditorType::FileUpload
            | EditorType::ContentPicker
            | EditorType::ContentTypeAndLabelsPicker
            | EditorType::Checkbox
            | EditorType::UserGroupSelect => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_conversion() {
        assert_eq!(
            ContentBlockType::from_tag("HEADING"),
            Some(ContentBlockType::Heading)
        );
        assert_eq!(
            ContentBlockType::from_tag("MEDIA_PLAYER_TITLE_TEXT_BUTTON"),
            Some(ContentBlockType::MediaPlayerTitleTextButton)
        );
        assert_eq!(ContentBlockType::from_tag("heading"), None);
        assert_eq!(ContentBlockType::from_tag("NOT_A_REAL_TYPE"), None);
    }

    #[test]
    fn test_serde_tags_match_as_str() {
        for block_type in ContentBlockType::ALL {
            let json = serde_json::to_value(block_type).unwrap();
            assert_eq!(json, serde_json::Value::String(block_type.as_str().into()));
        }
    }

    #[test]
    fn test_all_is_complete_and_unique() {
        let mut tags: Vec<&str> = ContentBlockType::ALL.iter().map(|t| t.as_str()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), ContentBlockType::ALL.len());
    }
}
