//! Edit a page file through the content editor.

use crate::Direction;
use anyhow::{Context, Result};
use avo_core::services::TracingNotifier;
use avo_core::{
    rows_from_json, BlockRegistry, ClientError, Config, ContentBlockId, ContentBlockSchema,
    ContentClient, ContentEditor, ContentId, FormGroupType, MoveDirection, Translations,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Content client backed by a page file
///
/// The file is either a bare list of rows or a page object carrying them
/// under `content_blocks`. Saving keeps that shape and every other page
/// field, and hands out ids to blocks that never had one.
pub struct FileClient {
    path: PathBuf,
}

impl FileClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_document(&self) -> Result<Value, ClientError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| ClientError::Server(vec![e.to_string()]))
    }

    /// Rows currently stored in the file
    pub async fn read_rows(&self) -> Result<Vec<ContentBlockSchema>, ClientError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        rows_from_json(&json).map_err(|e| ClientError::Server(vec![e.to_string()]))
    }
}

impl ContentClient for FileClient {
    async fn fetch_blocks(
        &self,
        _content_id: ContentId,
    ) -> Result<Vec<ContentBlockSchema>, ClientError> {
        self.read_rows().await
    }

    async fn save_blocks(
        &self,
        _content_id: Option<ContentId>,
        mut rows: Vec<ContentBlockSchema>,
    ) -> Result<Vec<ContentBlockSchema>, ClientError> {
        let mut next_id = rows
            .iter()
            .filter_map(|row| row.id.map(|id| id.as_i64()))
            .max()
            .unwrap_or(0);
        for row in rows.iter_mut().filter(|row| row.id.is_none()) {
            next_id += 1;
            row.id = Some(ContentBlockId::new(next_id));
        }

        let stored =
            serde_json::to_value(&rows).map_err(|e| ClientError::Request(e.to_string()))?;
        let document = match self.read_document().await? {
            Value::Object(mut page) if page.contains_key("content_blocks") => {
                page.insert("content_blocks".to_string(), stored);
                Value::Object(page)
            }
            _ => stored,
        };

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| ClientError::Request(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        Ok(rows)
    }
}

/// One field edit requested on the command line
pub struct FieldChange {
    pub block: usize,
    pub group: FormGroupType,
    pub key: String,
    pub value: String,
    pub index: Option<usize>,
}

async fn open_editor(
    config_path: &Path,
    page: &Path,
) -> Result<(ContentEditor<FileClient>, Option<ContentId>)> {
    let config = Config::from_file_or_default(config_path).context("Failed to load configuration")?;
    let translations = Translations::load(config.translations_path().as_deref())
        .context("Failed to load translations")?;

    let mut editor = ContentEditor::new(
        BlockRegistry::standard(),
        FileClient::new(page),
        TracingNotifier,
        translations,
    );

    // A page file may belong to no stored page yet, so it is read directly
    // instead of fetched by content id
    let ticket = editor.begin_load();
    let rows = editor.client().read_rows().await;
    let content_id = rows
        .as_ref()
        .ok()
        .and_then(|rows| rows.iter().find_map(|row| row.content_id));
    editor
        .finish_load(ticket, rows)
        .with_context(|| format!("Failed to load {}", page.display()))?;
    Ok((editor, content_id))
}

pub async fn set_field(config_path: &Path, page: &Path, change: FieldChange) -> Result<()> {
    let (mut editor, content_id) = open_editor(config_path, page).await?;

    // Plain text is accepted without JSON quoting
    let value = serde_json::from_str(&change.value).unwrap_or(Value::String(change.value));
    let errors = editor
        .change_field(change.block, change.group, &change.key, value, change.index)
        .with_context(|| format!("Failed to change `{}`", change.key))?;
    for error in &errors {
        tracing::warn!("{}: {}", change.key, error);
    }

    editor
        .save(content_id)
        .await
        .with_context(|| format!("Failed to save {}", page.display()))?;
    Ok(())
}

pub async fn move_block(
    config_path: &Path,
    page: &Path,
    block: usize,
    direction: Direction,
) -> Result<()> {
    let (mut editor, content_id) = open_editor(config_path, page).await?;
    let direction = match direction {
        Direction::Up => MoveDirection::Up,
        Direction::Down => MoveDirection::Down,
    };
    let target = editor.move_block(block, direction)?;
    tracing::debug!("Moved block {} to {}", block, target);

    editor
        .save(content_id)
        .await
        .with_context(|| format!("Failed to save {}", page.display()))?;
    Ok(())
}
