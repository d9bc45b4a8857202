//! The block type registry: which block types a page may contain and how
//! to build their defaults.

use crate::blocks::{self, BlockFactory};
use crate::error::ContentBlockError;
use crate::models::ContentBlockConfig;
use avo_types::ContentBlockType;
use std::collections::BTreeMap;

/// Immutable mapping from block type to factory
///
/// Built once and handed to the parser and the editor. Tests can build a
/// registry holding only the types under test.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    factories: BTreeMap<ContentBlockType, BlockFactory>,
    order: Vec<ContentBlockType>,
}

impl BlockRegistry {
    /// Registry with every block type
    pub fn standard() -> Self {
        Self::with_types(ContentBlockType::ALL)
    }

    /// Registry restricted to the given types, kept in the given order
    pub fn with_types(types: impl IntoIterator<Item = ContentBlockType>) -> Self {
        let mut factories = BTreeMap::new();
        let mut order = Vec::new();
        for block_type in types {
            if factories
                .insert(block_type, blocks::factory_for(block_type))
                .is_none()
            {
                order.push(block_type);
            }
        }
        Self { factories, order }
    }

    /// Registered types, in add-block menu order
    pub fn types(&self) -> &[ContentBlockType] {
        &self.order
    }

    pub fn contains(&self, block_type: ContentBlockType) -> bool {
        self.factories.contains_key(&block_type)
    }

    pub fn factory(&self, block_type: ContentBlockType) -> Result<BlockFactory, ContentBlockError> {
        self.factories.get(&block_type).copied().ok_or_else(|| {
            tracing::error!("No factory registered for block type {}", block_type);
            ContentBlockError::Unregistered(block_type)
        })
    }

    /// Look a factory up by its persisted tag
    pub fn factory_by_tag(&self, tag: &str) -> Result<BlockFactory, ContentBlockError> {
        let block_type = ContentBlockType::from_tag(tag).ok_or_else(|| {
            tracing::error!("Unknown content block type tag: {}", tag);
            ContentBlockError::UnknownBlockType(tag.to_string())
        })?;
        self.factory(block_type)
    }

    /// Fresh default config of a type at a position
    pub fn create(
        &self,
        block_type: ContentBlockType,
        position: usize,
    ) -> Result<ContentBlockConfig, ContentBlockError> {
        Ok(self.factory(block_type)?(position))
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
