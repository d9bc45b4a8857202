//! # avo-render
//!
//! HTML rendering for content pages.
//!
//! This crate turns preview blocks and block edit forms into HTML, wrapped
//! in page shells rendered with Askama.

pub mod blocks;
pub mod form;
pub mod templates;

use avo_core::{BlockForm, PagePreview};
use askama::Template;
use thiserror::Error;

pub use blocks::render_block;
pub use form::render_form;
pub use templates::{FormTemplate, PageTemplate};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

/// Render a full preview page
pub fn render_page_html(
    site_title: &str,
    title: &str,
    page: &PagePreview,
) -> Result<String, RenderError> {
    let template = PageTemplate {
        site_title: site_title.to_string(),
        title: title.to_string(),
        blocks: page.blocks.iter().map(render_block).collect(),
    };
    Ok(template.render()?)
}

/// Render the edit form of one block as a standalone page
pub fn render_form_html(site_title: &str, form: &BlockForm) -> Result<String, RenderError> {
    let template = FormTemplate {
        site_title: site_title.to_string(),
        title: form.name.clone(),
        form_html: render_form(form),
    };
    Ok(template.render()?)
}

/// HTML escape function to prevent XSS
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use avo_core::{BlockRegistry, ContentBlockType, FormGroupType, FormState, PreviewRenderer, Router};
    use serde_json::json;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_page_html() {
        let registry = BlockRegistry::standard();
        let mut heading = registry.create(ContentBlockType::Heading, 0).unwrap();
        heading
            .set_value(FormGroupType::Components, "children", json!("Hallo <wereld>"), None)
            .unwrap();

        let router = Router::default();
        let page = PreviewRenderer::new(&router)
            .render_page(&[heading])
            .unwrap();
        let html = render_page_html("AvO", "Over ons", &page).unwrap();

        assert!(html.contains("<title>Over ons | AvO</title>"));
        assert!(html.contains("Hallo &lt;wereld&gt;"));
        assert!(html.contains("data-component=\"BlockHeading\""));
    }

    #[test]
    fn test_render_form_html() {
        let registry = BlockRegistry::standard();
        let config = registry.create(ContentBlockType::Quote, 3).unwrap();
        let html = render_form_html("AvO", &FormState::new().render(&config)).unwrap();

        assert!(html.contains("<title>Quote | AvO</title>"));
        assert!(html.contains("id=\"components-3-quote\""));
    }
}
