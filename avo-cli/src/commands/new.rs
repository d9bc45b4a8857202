//! Print the default row of a block type.

use anyhow::{anyhow, Result};
use avo_core::{to_wire, BlockRegistry, ContentBlockType};

pub fn new_block(tag: &str, position: usize) -> Result<()> {
    let block_type = ContentBlockType::from_tag(&tag.to_uppercase())
        .ok_or_else(|| anyhow!("Unknown content block type: {}", tag))?;
    let config = BlockRegistry::standard().create(block_type, position)?;
    println!("{}", serde_json::to_string_pretty(&to_wire(&config, None))?);
    Ok(())
}
