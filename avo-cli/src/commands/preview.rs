//! Render a page preview to HTML.

use super::page::{read_blocks, write_output};
use anyhow::{Context, Result};
use avo_core::{BlockRegistry, Config, PreviewRenderer, Router};
use avo_render::render_page_html;
use std::path::Path;

pub fn preview_page(config_path: &Path, page: &Path, output: Option<&Path>) -> Result<()> {
    let config = Config::from_file_or_default(config_path).context("Failed to load configuration")?;
    let registry = BlockRegistry::standard();
    let blocks = read_blocks(page, &registry)?;

    let router = Router::from_config(&config);
    let preview = PreviewRenderer::new(&router)
        .render_page(&blocks)
        .context("Failed to render preview")?;

    let title = page
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Pagina".to_string());
    let html = render_page_html(&config.site.title, &title, &preview)?;
    write_output(output, &html)
}
