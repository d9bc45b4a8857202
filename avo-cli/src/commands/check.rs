//! Parse a page and run every validator.

use super::page::read_blocks;
use anyhow::{bail, Result};
use avo_core::{BlockRegistry, ContentBlockType, FormState};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReport {
    position: usize,
    block_type: ContentBlockType,
    field: String,
    messages: Vec<String>,
}

#[derive(Serialize)]
struct CheckSummary {
    blocks: usize,
    errors: Vec<FieldReport>,
}

/// Fails when any field is invalid so scripts can gate on the exit code
pub fn check_page(page: &Path, json: bool) -> Result<()> {
    let registry = BlockRegistry::standard();
    let blocks = read_blocks(page, &registry)?;

    let mut errors = Vec::new();
    for block in &blocks {
        let mut form = FormState::new();
        form.validate_all(block);
        for (field, messages) in form.messages() {
            errors.push(FieldReport {
                position: block.position(),
                block_type: block.block_type,
                field,
                messages,
            });
        }
    }

    let summary = CheckSummary {
        blocks: blocks.len(),
        errors,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Checked {} blocks: {} invalid fields",
            summary.blocks,
            summary.errors.len()
        );
        for report in &summary.errors {
            println!(
                "- #{} {} {}: {}",
                report.position,
                report.block_type,
                report.field,
                report.messages.join("; ")
            );
        }
    }

    if !summary.errors.is_empty() {
        bail!("{} invalid fields in {}", summary.errors.len(), page.display());
    }
    Ok(())
}
