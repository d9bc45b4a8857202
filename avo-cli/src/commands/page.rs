//! Reading and writing page files.

use anyhow::{Context, Result};
use avo_core::{from_wire, rows_from_json, BlockRegistry, ContentBlockConfig, ContentBlockSchema};
use std::fs;
use std::path::Path;

/// Persisted rows of a page file
pub fn read_rows(path: &Path) -> Result<Vec<ContentBlockSchema>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;
    rows_from_json(&json).with_context(|| format!("Failed to parse page {}", path.display()))
}

/// Parsed blocks of a page file, in position order
pub fn read_blocks(path: &Path, registry: &BlockRegistry) -> Result<Vec<ContentBlockConfig>> {
    let rows = read_rows(path)?;
    from_wire(registry, &rows)
        .with_context(|| format!("Failed to parse content blocks of {}", path.display()))
}

/// Write `contents` to a file, or to stdout without one
pub fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
