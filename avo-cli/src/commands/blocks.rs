//! List the registered block types.

use anyhow::Result;
use avo_core::blocks::display_name;
use avo_core::{BlockRegistry, ContentBlockType};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockSummary {
    block_type: ContentBlockType,
    name: &'static str,
    repeatable: bool,
    navigable: bool,
    component_fields: usize,
    block_fields: usize,
}

pub fn list_blocks(json: bool) -> Result<()> {
    let registry = BlockRegistry::standard();
    let mut summaries = Vec::new();
    for &block_type in registry.types() {
        let config = registry.create(block_type, 0)?;
        summaries.push(BlockSummary {
            block_type,
            name: display_name(block_type),
            repeatable: block_type.is_repeatable(),
            navigable: block_type.is_navigable(),
            component_fields: config.components.fields.len(),
            block_fields: config.block.fields.len(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        let mut flags = Vec::new();
        if summary.repeatable {
            flags.push("repeatable");
        }
        if summary.navigable {
            flags.push("navigable");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!(
            "{:<32} {}{}",
            summary.block_type.as_str(),
            summary.name,
            flags
        );
    }
    Ok(())
}
