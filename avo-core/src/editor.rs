//! State of the admin content-page editor: the ordered list of blocks, one
//! form state per block, and the load/save flow against the backend.

use crate::error::{ContentBlockError, LimitViolation};
use crate::form::FormState;
use crate::i18n::Translate;
use crate::models::{ContentBlockConfig, FormGroupType};
use crate::registry::BlockRegistry;
use crate::services::{ClientError, ContentClient, Notifier};
use crate::wire::{from_wire, to_wire_list, ContentBlockSchema};
use avo_types::{ContentBlockType, ContentId};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    ContentBlock(#[from] ContentBlockError),

    #[error(transparent)]
    Limit(#[from] LimitViolation),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Content blocks have validation errors")]
    Invalid,

    #[error("Block index {index} out of range ({len} blocks)")]
    BlockIndex { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Ticket of one load request; only the latest ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic request counter
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the block list
    Applied { blocks: usize },

    /// A newer request was started; the response was discarded
    Stale,
}

/// Admin content editor
pub struct ContentEditor<C> {
    registry: BlockRegistry,
    client: C,
    notifier: Box<dyn Notifier>,
    i18n: Box<dyn Translate>,
    blocks: Vec<ContentBlockConfig>,
    forms: Vec<FormState>,
    loads: RequestSequence,
}

impl<C: ContentClient> ContentEditor<C> {
    pub fn new(
        registry: BlockRegistry,
        client: C,
        notifier: impl Notifier + 'static,
        i18n: impl Translate + 'static,
    ) -> Self {
        Self {
            registry,
            client,
            notifier: Box::new(notifier),
            i18n: Box::new(i18n),
            blocks: Vec::new(),
            forms: Vec::new(),
            loads: RequestSequence::default(),
        }
    }

    pub fn blocks(&self) -> &[ContentBlockConfig] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Result<&ContentBlockConfig, EditorError> {
        self.blocks.get(index).ok_or(EditorError::BlockIndex {
            index,
            len: self.blocks.len(),
        })
    }

    pub fn form(&self, index: usize) -> Result<&FormState, EditorError> {
        self.check_index(index)?;
        Ok(&self.forms[index])
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(EditorError::BlockIndex {
                index,
                len: self.blocks.len(),
            })
        }
    }

    fn renumber(&mut self) {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.set_position(index);
        }
    }

    /// Append a default block; returns its index
    pub fn add_block(&mut self, block_type: ContentBlockType) -> Result<usize, EditorError> {
        let index = self.blocks.len();
        self.insert_block(index, block_type)?;
        Ok(index)
    }

    /// Insert a default block at `index`, shifting later blocks down
    pub fn insert_block(
        &mut self,
        index: usize,
        block_type: ContentBlockType,
    ) -> Result<(), EditorError> {
        if index > self.blocks.len() {
            return Err(EditorError::BlockIndex {
                index,
                len: self.blocks.len(),
            });
        }
        let config = self.registry.create(block_type, index)?;
        self.blocks.insert(index, config);
        self.forms.insert(index, FormState::new());
        self.renumber();
        tracing::debug!("Added {} block at position {}", block_type, index);
        Ok(())
    }

    pub fn remove_block(&mut self, index: usize) -> Result<ContentBlockConfig, EditorError> {
        self.check_index(index)?;
        let removed = self.blocks.remove(index);
        self.forms.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Move a block one slot; moving past either end leaves the list as is
    ///
    /// Returns the block's new index.
    pub fn move_block(&mut self, index: usize, direction: MoveDirection) -> Result<usize, EditorError> {
        self.check_index(index)?;
        let target = match direction {
            MoveDirection::Up => index.saturating_sub(1),
            MoveDirection::Down => (index + 1).min(self.blocks.len() - 1),
        };
        self.reorder(index, target)?;
        Ok(target)
    }

    /// Move the block at `from` to `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let block = self.blocks.remove(from);
            let form = self.forms.remove(from);
            self.blocks.insert(to, block);
            self.forms.insert(to, form);
        }
        self.renumber();
        Ok(())
    }

    /// Apply an editor change to a block
    ///
    /// Returns the field's validation messages; an invalid value is still
    /// stored so the editor shows what was typed.
    pub fn change_field(
        &mut self,
        index: usize,
        group: FormGroupType,
        key: &str,
        value: Value,
        repetition_index: Option<usize>,
    ) -> Result<Vec<String>, EditorError> {
        self.check_index(index)?;
        let mut pending = None;
        let errors = self.forms[index].change(
            &self.blocks[index],
            group,
            key,
            value,
            repetition_index,
            |group, key, value, repetition_index| {
                pending = Some((group, key.to_string(), value, repetition_index));
            },
        )?;

        if let Some((group, key, value, repetition_index)) = pending {
            self.blocks[index].set_value(group, &key, value, repetition_index)?;
        }
        Ok(errors)
    }

    /// Append an item to a block's repeated content
    pub fn add_item(&mut self, index: usize) -> Result<usize, EditorError> {
        self.check_index(index)?;
        self.blocks[index]
            .add_item()
            .map_err(|violation| self.reject(violation))
    }

    /// Remove an item from a block's repeated content
    pub fn remove_item(&mut self, index: usize, item: usize) -> Result<(), EditorError> {
        self.check_index(index)?;
        self.blocks[index]
            .remove_item(item)
            .map_err(|violation| self.reject(violation))?;
        self.forms[index].forget_item(item);
        Ok(())
    }

    fn reject(&self, violation: LimitViolation) -> EditorError {
        tracing::warn!("Rejected item change: {}", violation);
        self.notifier.danger(
            &self
                .i18n
                .t(violation.translation_key(), &violation.interpolations()),
        );
        EditorError::Limit(violation)
    }

    /// Validate every block; returns true when the page may be saved
    pub fn validate(&mut self) -> bool {
        let mut invalid = 0;
        for (form, block) in self.forms.iter_mut().zip(&self.blocks) {
            invalid += form.validate_all(block);
        }
        invalid == 0
    }

    pub fn has_errors(&self) -> bool {
        self.forms.iter().any(FormState::has_errors)
    }

    /// Start a load; only the most recently started load can be applied
    pub fn begin_load(&mut self) -> RequestTicket {
        self.loads.begin()
    }

    /// Apply a load response if its ticket is still current
    ///
    /// Parse failures are fatal and leave the current blocks untouched.
    pub fn apply_load(
        &mut self,
        ticket: RequestTicket,
        rows: &[ContentBlockSchema],
    ) -> Result<LoadOutcome, EditorError> {
        if !self.loads.is_current(ticket) {
            tracing::warn!("Discarding stale content block response {:?}", ticket);
            return Ok(LoadOutcome::Stale);
        }

        let blocks = from_wire(&self.registry, rows)?;
        self.forms = blocks.iter().map(|_| FormState::new()).collect();
        self.blocks = blocks;
        self.renumber();
        Ok(LoadOutcome::Applied {
            blocks: self.blocks.len(),
        })
    }

    /// Settle a load with the client's answer
    ///
    /// Answers to superseded tickets are dropped, failures included.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        response: Result<Vec<ContentBlockSchema>, ClientError>,
    ) -> Result<LoadOutcome, EditorError> {
        match response {
            Ok(rows) => self.apply_load(ticket, &rows),
            Err(err) if !self.loads.is_current(ticket) => {
                tracing::warn!("Ignoring failed stale content block request {:?}: {}", ticket, err);
                Ok(LoadOutcome::Stale)
            }
            Err(err) => {
                tracing::error!("Failed to fetch content blocks: {}", err);
                self.notifier.danger(&self.i18n.t("content-page.load.failed", &[]));
                Err(err.into())
            }
        }
    }

    /// Fetch and apply the blocks of a page
    pub async fn load(&mut self, content_id: ContentId) -> Result<LoadOutcome, EditorError> {
        let ticket = self.begin_load();
        tracing::debug!("Loading content blocks of {}", content_id);
        let response = self.client.fetch_blocks(content_id).await;
        self.finish_load(ticket, response)
    }

    /// Persist the full ordered block list
    ///
    /// Refused while validation errors exist. On failure the local blocks
    /// stay as they are; on success the stored ids are taken over.
    pub async fn save(&mut self, content_id: Option<ContentId>) -> Result<(), EditorError> {
        if !self.validate() {
            self.notifier.danger(&self.i18n.t("content-page.save.invalid", &[]));
            return Err(EditorError::Invalid);
        }

        self.renumber();
        let rows = to_wire_list(&self.blocks, content_id);
        match self.client.save_blocks(content_id, rows).await {
            Ok(saved) => {
                for row in saved {
                    if let Some(block) = self.blocks.get_mut(row.position) {
                        block.id = row.id;
                    }
                }
                tracing::info!(
                    "Saved {} content blocks of page {:?}",
                    self.blocks.len(),
                    content_id
                );
                self.notifier.success(&self.i18n.t("content-page.save.success", &[]));
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to save content blocks of {:?}: {}", content_id, err);
                self.notifier.danger(&self.i18n.t("content-page.save.failed", &[]));
                Err(err.into())
            }
        }
    }
}
