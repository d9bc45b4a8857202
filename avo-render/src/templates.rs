//! Askama template definitions.

use askama::Template;

/// Preview page of a whole content page
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub site_title: String,
    pub title: String,

    /// Pre-rendered HTML per block, in page order
    pub blocks: Vec<String>,
}

/// Edit form page of one block
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub site_title: String,
    pub title: String,
    pub form_html: String,
}
