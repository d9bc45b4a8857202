//! Re-serialize a page with defaults merged in.

use super::page::{read_rows, write_output};
use anyhow::{Context, Result};
use avo_core::{from_wire, to_wire_list, BlockRegistry};
use std::path::Path;

pub fn normalize_page(page: &Path, output: Option<&Path>) -> Result<()> {
    let registry = BlockRegistry::standard();
    let rows = read_rows(page)?;
    let content_id = rows.iter().find_map(|row| row.content_id);
    let blocks = from_wire(&registry, &rows)
        .with_context(|| format!("Failed to parse content blocks of {}", page.display()))?;

    let normalized = to_wire_list(&blocks, content_id);
    tracing::debug!("Normalized {} blocks of {}", normalized.len(), page.display());
    write_output(output, &serde_json::to_string_pretty(&normalized)?)
}
