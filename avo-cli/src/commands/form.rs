//! Render the edit form of one block.

use super::page::read_blocks;
use anyhow::{anyhow, Context, Result};
use avo_core::{BlockRegistry, Config, FormState};
use avo_render::render_form_html;
use std::path::Path;

pub fn show_form(config_path: &Path, page: &Path, index: usize) -> Result<()> {
    let config = Config::from_file_or_default(config_path).context("Failed to load configuration")?;
    let registry = BlockRegistry::standard();
    let blocks = read_blocks(page, &registry)?;
    let block = blocks
        .get(index)
        .ok_or_else(|| anyhow!("Page has {} blocks, no block {}", blocks.len(), index))?;

    // Show current validation errors next to the fields
    let mut form = FormState::new();
    form.validate_all(block);
    println!("{}", render_form_html(&config.site.title, &form.render(block))?);
    Ok(())
}
