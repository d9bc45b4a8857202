//! Error types of the content block model.

use crate::models::FormGroupType;
use avo_types::ContentBlockType;
use thiserror::Error;

/// Defects in block configuration or persisted data
///
/// These are developer-facing: a page that produces one of them cannot be
/// rendered or parsed safely.
#[derive(Error, Debug)]
pub enum ContentBlockError {
    #[error("Unknown content block type: {0}")]
    UnknownBlockType(String),

    #[error("Block type {0} is not registered")]
    Unregistered(ContentBlockType),

    #[error("Block {block_type} has no {group} field named `{key}`")]
    UnknownField {
        block_type: ContentBlockType,
        group: FormGroupType,
        key: String,
    },

    #[error("Repetition index {index} out of range (block has {len} items)")]
    RepetitionIndex { index: usize, len: usize },

    #[error("Block {0} has repeated items; a repetition index is required")]
    MissingRepetitionIndex(ContentBlockType),

    #[error("Block state is missing `blockType`")]
    MissingBlockType,

    #[error("Invalid persisted block at position {position}: {message}")]
    InvalidRow { position: usize, message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected attempt to grow or shrink repeated items
///
/// The messages are shown to editors as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitViolation {
    #[error("Je kan maximaal {max} items toevoegen")]
    Maximum { max: usize },

    #[error("Er moeten minstens {min} items overblijven")]
    Minimum { min: usize },

    #[error("Item {index} bestaat niet")]
    NoSuchItem { index: usize },

    #[error("Blok {0} heeft geen herhaalbare items")]
    NotRepeatable(ContentBlockType),
}

impl LimitViolation {
    /// Translation key of the user-facing message
    pub fn translation_key(&self) -> &'static str {
        match self {
            LimitViolation::Maximum { .. } => "content-block.limit.maximum",
            LimitViolation::Minimum { .. } => "content-block.limit.minimum",
            LimitViolation::NoSuchItem { .. } => "content-block.limit.no-such-item",
            LimitViolation::NotRepeatable(_) => "content-block.limit.not-repeatable",
        }
    }

    /// Interpolations for the translated message
    pub fn interpolations(&self) -> Vec<(&'static str, String)> {
        match self {
            LimitViolation::Maximum { max } => vec![("max", max.to_string())],
            LimitViolation::Minimum { min } => vec![("min", min.to_string())],
            LimitViolation::NoSuchItem { index } => vec![("index", index.to_string())],
            LimitViolation::NotRepeatable(block_type) => {
                vec![("blockType", block_type.to_string())]
            }
        }
    }
}
