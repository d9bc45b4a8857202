//! HTML for preview blocks, one renderer per display component.

use crate::html_escape;
use avo_core::preview::{DisplayComponent, HeaderBand, PreviewBlock, PreviewProps};
use avo_core::routing::is_safe_link;
use serde_json::Value;

/// Render one block with its wrapper
pub fn render_block(block: &PreviewBlock) -> String {
    let props = &block.props;
    let elements = block.elements.as_deref().unwrap_or_default();
    let body = match block.component {
        DisplayComponent::Accordions => accordions(elements),
        DisplayComponent::AnchorLinks => anchor_links(props, elements),
        DisplayComponent::Buttons => buttons(props, elements),
        DisplayComponent::Ctas => ctas(elements),
        DisplayComponent::Heading => heading(props),
        DisplayComponent::Hero => hero(props),
        DisplayComponent::IFrame => iframe(props),
        DisplayComponent::Image => image(props),
        DisplayComponent::ImageGrid => image_grid(props, elements),
        DisplayComponent::Intro => intro(props),
        DisplayComponent::Klaar => klaar(props, elements),
        DisplayComponent::MediaGrid => media_grid(props, elements),
        DisplayComponent::MediaPlayer => media_player(props),
        DisplayComponent::MediaPlayerTitleTextButton => media_player_title_text_button(props),
        DisplayComponent::PageOverview => page_overview(props),
        DisplayComponent::ProjectsSpotlight => projects_spotlight(elements),
        DisplayComponent::Quote => quote(props),
        DisplayComponent::RichText => rich_text(props, block.elements.as_deref()),
        DisplayComponent::Spotlight => spotlight(elements),
    };

    let mut html = String::new();
    html.push_str(&format!(
        "<section class=\"c-content-block c-content-block--{}\" data-component=\"{}\" data-position=\"{}\"",
        block.block_type.as_str().to_lowercase().replace('_', "-"),
        block.component.name(),
        block.position
    ));
    let anchor = props.text("anchor");
    if !anchor.is_empty() {
        html.push_str(&format!(" id=\"{}\"", html_escape(anchor)));
    }
    html.push_str(&format!(
        " style=\"background-color:{}\">\n",
        html_escape(props.text("backgroundColor"))
    ));
    if let Some(band) = &block.header {
        html.push_str(&header_band(band));
    }

    let mut classes = vec!["c-content-block__inner".to_string()];
    for side in ["top", "bottom"] {
        if let Some(value) = props.get("padding").and_then(|p| p.get(side)).and_then(Value::as_str) {
            classes.push(format!("u-padding-{}-{}", side, value));
        }
    }
    if !props.flag("fullWidth") {
        classes.push("o-container".to_string());
    }
    html.push_str(&format!("  <div class=\"{}\">\n", classes.join(" ")));
    html.push_str(&body);
    html.push_str("  </div>\n</section>\n");
    html
}

fn header_band(band: &HeaderBand) -> String {
    let height = band
        .height()
        .map(|h| format!(";height:{}px", h))
        .unwrap_or_default();
    format!(
        "  <div class=\"c-content-block__header-bg\" style=\"background-color:{}{}\"></div>\n",
        html_escape(&band.color),
        height
    )
}

fn text(props: &PreviewProps, key: &str) -> String {
    html_escape(props.text(key))
}

/// Optional element wrapping escaped text, skipped when the text is blank
fn tag(name: &str, class: &str, value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    format!(
        "    <{name} class=\"{class}\">{}</{name}>\n",
        html_escape(value)
    )
}

/// Rich text is stored as HTML and embedded as-is
fn rich(class: &str, value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    format!("    <div class=\"{}\">{}</div>\n", class, value)
}

fn heading_tag(props: &PreviewProps, key: &str) -> &'static str {
    match props.text(key) {
        "h1" => "h1",
        "h3" => "h3",
        "h4" => "h4",
        _ => "h2",
    }
}

fn button(label: &str, href: Option<&str>, kind: &str, icon: &str) -> String {
    if label.trim().is_empty() && icon.is_empty() {
        return String::new();
    }
    let icon = if icon.is_empty() {
        String::new()
    } else {
        format!("<span class=\"o-svg-icon o-svg-icon-{}\"></span>", html_escape(icon))
    };
    match href {
        Some(href) => format!(
            "    <a class=\"c-button c-button--{}\" href=\"{}\">{}{}</a>\n",
            html_escape(kind),
            html_escape(href),
            icon,
            html_escape(label)
        ),
        None => format!(
            "    <button class=\"c-button c-button--{}\" type=\"button\" disabled>{}{}</button>\n",
            html_escape(kind),
            icon,
            html_escape(label)
        ),
    }
}

fn align_class(props: &PreviewProps, key: &str) -> String {
    let align = props.text(key);
    if align.is_empty() {
        String::new()
    } else {
        format!(" u-text-{}", html_escape(align))
    }
}

fn image_tag(src: &str, alt: &str, class: &str) -> String {
    if src.trim().is_empty() {
        return String::new();
    }
    format!(
        "    <img class=\"{}\" src=\"{}\" alt=\"{}\">\n",
        class,
        html_escape(src),
        html_escape(alt)
    )
}

fn heading(props: &PreviewProps) -> String {
    let level = heading_tag(props, "type");
    format!(
        "    <{level} class=\"c-heading{}\">{}</{level}>\n",
        align_class(props, "align"),
        text(props, "children")
    )
}

fn intro(props: &PreviewProps) -> String {
    let mut html = format!("    <div class=\"c-intro{}\">\n", align_class(props, "align"));
    html.push_str(&tag("h2", "c-intro__title", props.text("title")));
    html.push_str(&rich("c-intro__content", props.text("content")));
    html.push_str("    </div>\n");
    html
}

fn rich_text(props: &PreviewProps, columns: Option<&[PreviewProps]>) -> String {
    match columns {
        Some(columns) => {
            let mut html = "    <div class=\"c-rich-text-columns\">\n".to_string();
            for column in columns {
                html.push_str(&rich("c-rich-text c-rich-text__column", column.text("content")));
            }
            html.push_str("    </div>\n");
            html
        }
        None => rich("c-rich-text", props.text("content")),
    }
}

fn quote(props: &PreviewProps) -> String {
    let mut html = "    <blockquote class=\"c-quote\">\n".to_string();
    html.push_str(&tag("p", "c-quote__text", props.text("quote")));
    html.push_str(&image_tag(
        props.text("authorImage"),
        props.text("authorName"),
        "c-quote__author-image",
    ));
    if props.text("authorImage").is_empty() {
        html.push_str(&tag("span", "c-quote__author-initials", props.text("authorInitials")));
    }
    html.push_str(&tag("cite", "c-quote__author", props.text("authorName")));
    html.push_str("    </blockquote>\n");
    html
}

fn buttons(props: &PreviewProps, elements: &[PreviewProps]) -> String {
    let mut html = format!("    <div class=\"c-buttons{}\">\n", align_class(props, "align"));
    for element in elements {
        html.push_str(&button(
            element.text("label"),
            element.link("buttonAction"),
            element.text("type"),
            element.text("icon"),
        ));
    }
    html.push_str("    </div>\n");
    html
}

fn ctas(elements: &[PreviewProps]) -> String {
    let mut html = "    <div class=\"c-ctas\">\n".to_string();
    for element in elements {
        let level = heading_tag(element, "headingType");
        html.push_str("    <div class=\"c-cta\">\n");
        html.push_str(&format!(
            "    <{level} class=\"c-cta__heading\">{}</{level}>\n",
            text(element, "heading")
        ));
        html.push_str(&rich("c-cta__content", element.text("content")));
        html.push_str(&button(
            element.text("buttonLabel"),
            element.link("buttonAction"),
            element.text("buttonType"),
            element.text("buttonIcon"),
        ));
        html.push_str("    </div>\n");
    }
    html.push_str("    </div>\n");
    html
}

fn accordions(elements: &[PreviewProps]) -> String {
    let mut html = "    <div class=\"c-accordions\">\n".to_string();
    for element in elements {
        html.push_str(&format!(
            "    <details class=\"c-accordion\">\n    <summary>{}</summary>\n",
            text(element, "title")
        ));
        html.push_str(&rich("c-accordion__content", element.text("content")));
        html.push_str("    </details>\n");
    }
    html.push_str("    </div>\n");
    html
}

fn anchor_links(props: &PreviewProps, elements: &[PreviewProps]) -> String {
    let dividers = if props.flag("hasDividers") {
        " c-anchor-links--dividers"
    } else {
        ""
    };
    let mut html = format!(
        "    <nav class=\"c-anchor-links{}{}\">\n",
        dividers,
        align_class(props, "align")
    );
    for element in elements {
        html.push_str(&button(
            element.text("label"),
            element.link("buttonAction"),
            element.text("type"),
            "",
        ));
    }
    html.push_str("    </nav>\n");
    html
}

fn image(props: &PreviewProps) -> String {
    let mut html = format!(
        "    <figure class=\"c-image c-image--{}\">\n",
        text(props, "width")
    );
    html.push_str(&image_tag(props.text("imageSource"), props.text("title"), "c-image__img"));
    html.push_str(&tag("figcaption", "c-image__title", props.text("title")));
    html.push_str(&tag("p", "c-image__text", props.text("text")));
    html.push_str("    </figure>\n");
    html
}

fn image_grid(props: &PreviewProps, elements: &[PreviewProps]) -> String {
    let mut html = format!(
        "    <div class=\"c-image-grid c-image-grid--{} c-image-grid--fill-{}{}\">\n",
        text(props, "format"),
        text(props, "fill"),
        align_class(props, "textAlign")
    );
    for element in elements {
        let tile = format!(
            "{}{}{}",
            image_tag(element.text("source"), element.text("title"), "c-image-grid__img"),
            tag("h3", "c-image-grid__title", element.text("title")),
            tag("p", "c-image-grid__text", element.text("text")),
        );
        match element.link("action") {
            Some(href) => html.push_str(&format!(
                "    <a class=\"c-image-grid__item\" href=\"{}\">\n{}    </a>\n",
                html_escape(href),
                tile
            )),
            None => html.push_str(&format!(
                "    <div class=\"c-image-grid__item\">\n{}    </div>\n",
                tile
            )),
        }
    }
    html.push_str("    </div>\n");
    html
}

fn iframe(props: &PreviewProps) -> String {
    if !is_safe_link(props.text("src")) {
        return format!(
            "    <div class=\"c-iframe c-iframe--empty\" title=\"{}\"></div>\n",
            text(props, "title")
        );
    }
    format!(
        "    <iframe class=\"c-iframe\" title=\"{}\" src=\"{}\" loading=\"lazy\"></iframe>\n",
        text(props, "title"),
        text(props, "src")
    )
}

/// Picked item id of a content picker value
fn picked(props: &PreviewProps, key: &str) -> String {
    match props.get(key).and_then(|action| action.get("value")) {
        Some(Value::String(value)) => html_escape(value),
        Some(Value::Null) | None => String::new(),
        Some(other) => html_escape(&other.to_string()),
    }
}

fn media_player(props: &PreviewProps) -> String {
    format!(
        "    <div class=\"c-media-player c-media-player--{}\" data-item=\"{}\" data-autoplay=\"{}\" title=\"{}\"></div>\n",
        text(props, "width"),
        picked(props, "item"),
        props.flag("autoplay"),
        text(props, "title")
    )
}

fn media_player_title_text_button(props: &PreviewProps) -> String {
    let level = heading_tag(props, "headingType");
    let mut html = format!(
        "    <div class=\"c-media-player-text{}\">\n",
        align_class(props, "align")
    );
    html.push_str(&format!(
        "    <div class=\"c-media-player\" data-item=\"{}\" data-autoplay=\"{}\" title=\"{}\"></div>\n",
        picked(props, "mediaItem"),
        props.flag("mediaAutoplay"),
        text(props, "mediaTitle")
    ));
    html.push_str(&format!(
        "    <{level} class=\"c-media-player-text__title\">{}</{level}>\n",
        text(props, "headingTitle")
    ));
    html.push_str(&rich("c-media-player-text__content", props.text("content")));
    html.push_str(&button(
        props.text("buttonLabel"),
        props.link("buttonAction"),
        props.text("buttonType"),
        props.text("buttonIcon"),
    ));
    html.push_str("    </div>\n");
    html
}

fn media_grid(props: &PreviewProps, elements: &[PreviewProps]) -> String {
    let mut html = "    <div class=\"c-media-grid\">\n".to_string();
    html.push_str(&tag("h2", "c-media-grid__title", props.text("title")));
    html.push_str("    <ul class=\"c-media-grid__items\">\n");
    for element in elements {
        let item = picked(element, "mediaItem");
        match element.link("mediaItem") {
            Some(href) => html.push_str(&format!(
                "    <li><a class=\"c-media-card\" href=\"{}\" data-item=\"{}\"></a></li>\n",
                html_escape(href),
                item
            )),
            None => html.push_str(&format!(
                "    <li><div class=\"c-media-card\" data-item=\"{}\"></div></li>\n",
                item
            )),
        }
    }
    html.push_str("    </ul>\n");
    if !props.text("ctaTitle").is_empty() {
        html.push_str("    <div class=\"c-media-grid__cta\">\n");
        html.push_str(&tag("h3", "c-media-grid__cta-title", props.text("ctaTitle")));
        html.push_str(&rich("c-media-grid__cta-content", props.text("ctaContent")));
        html.push_str(&button(
            props.text("ctaButtonLabel"),
            props.link("ctaButtonAction"),
            "secondary",
            "",
        ));
        html.push_str("    </div>\n");
    }
    html.push_str(&button(
        props.text("buttonLabel"),
        props.link("buttonAction"),
        "primary",
        "",
    ));
    html.push_str("    </div>\n");
    html
}

/// The overview itself is filled client-side from the selected content type
fn page_overview(props: &PreviewProps) -> String {
    let selection = props.get("contentTypeAndTabs");
    let content_type = selection
        .and_then(|s| s.get("selectedContentType"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let labels = selection
        .and_then(|s| s.get("selectedLabels"))
        .and_then(Value::as_array)
        .map(|labels| labels.len())
        .unwrap_or_default();
    format!(
        "    <div class=\"c-page-overview c-page-overview--{}\" data-content-type=\"{}\" data-tabs=\"{}\" data-tab-style=\"{}\" data-items-per-page=\"{}\"></div>\n",
        text(props, "itemStyle").to_lowercase(),
        html_escape(content_type),
        labels,
        text(props, "tabStyle"),
        text(props, "itemsPerPage")
    )
}

fn projects_spotlight(elements: &[PreviewProps]) -> String {
    let mut html = "    <div class=\"c-projects-spotlight\">\n".to_string();
    for element in elements {
        let href = element.link("project");
        html.push_str(&format!(
            "    <a class=\"c-projects-spotlight__item\" href=\"{}\">\n",
            html_escape(href.unwrap_or("#"))
        ));
        html.push_str(&image_tag(
            element.text("customImage"),
            element.text("customTitle"),
            "c-projects-spotlight__img",
        ));
        html.push_str(&tag("h3", "c-projects-spotlight__title", element.text("customTitle")));
        html.push_str("    </a>\n");
    }
    html.push_str("    </div>\n");
    html
}

fn spotlight(elements: &[PreviewProps]) -> String {
    let mut html = "    <div class=\"c-spotlight\">\n".to_string();
    for element in elements {
        let href = element.link("buttonAction");
        html.push_str(&format!(
            "    <a class=\"c-spotlight__item\" href=\"{}\">\n",
            html_escape(href.unwrap_or("#"))
        ));
        html.push_str(&image_tag(element.text("image"), element.text("title"), "c-spotlight__img"));
        html.push_str(&tag("p", "c-spotlight__title", element.text("title")));
        html.push_str("    </a>\n");
    }
    html.push_str("    </div>\n");
    html
}

fn hero(props: &PreviewProps) -> String {
    let mut html = format!(
        "    <div class=\"c-hero\" style=\"background-image:url('{}')\">\n",
        text(props, "src")
    );
    html.push_str(&format!(
        "    <h1 class=\"c-hero__title\" style=\"color:{}\">{}</h1>\n",
        text(props, "titleColor"),
        text(props, "title")
    ));
    if !props.text("content").is_empty() {
        html.push_str(&format!(
            "    <p class=\"c-hero__content\" style=\"color:{}\">{}</p>\n",
            text(props, "contentColor"),
            text(props, "content")
        ));
    }
    html.push_str(&button(
        props.text("buttonLabel"),
        props.link("buttonAction"),
        props.text("buttonType"),
        "",
    ));
    html.push_str("    </div>\n");
    html
}

fn klaar(props: &PreviewProps, elements: &[PreviewProps]) -> String {
    let mut html = "    <div class=\"c-klaar\">\n".to_string();
    html.push_str("    <ul class=\"c-klaar__titles\">\n");
    for element in elements {
        html.push_str(&format!("    <li>{}</li>\n", text(element, "title")));
    }
    html.push_str("    </ul>\n");
    html.push_str(&tag("p", "c-klaar__date", props.text("date")));
    html.push_str("    </div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use avo_core::preview::{LayoutHost, PreviewRenderer};
    use avo_core::{BlockRegistry, ContentBlockType, FormGroupType, Router};
    use serde_json::json;

    fn preview(config: &avo_core::ContentBlockConfig) -> PreviewBlock {
        let router = Router::default();
        PreviewRenderer::new(&router).render_config(config).unwrap()
    }

    #[test]
    fn test_every_component_renders() {
        let registry = BlockRegistry::standard();
        for block_type in ContentBlockType::ALL {
            let block = preview(&registry.create(block_type, 1).unwrap());
            let html = render_block(&block);
            assert!(html.starts_with("<section"), "{}", block_type);
            assert!(html.contains(block.component.name()), "{}", block_type);
            assert!(html.trim_end().ends_with("</section>"), "{}", block_type);
        }
    }

    #[test]
    fn test_buttons_link_through_router() {
        let mut config = BlockRegistry::standard()
            .create(ContentBlockType::Buttons, 0)
            .unwrap();
        config
            .set_value(FormGroupType::Components, "label", json!("Bekijk"), Some(0))
            .unwrap();
        config
            .set_value(
                FormGroupType::Components,
                "buttonAction",
                json!({"type": "COLLECTION", "value": "c-1"}),
                Some(0),
            )
            .unwrap();

        let html = render_block(&preview(&config));
        assert!(html.contains("href=\"/collecties/c-1\""));
        assert!(html.contains(">Bekijk</a>"));
    }

    #[test]
    fn test_links_with_unsafe_schemes_are_dropped() {
        let registry = BlockRegistry::standard();
        let mut iframe = registry.create(ContentBlockType::IFrame, 0).unwrap();
        iframe
            .set_value(FormGroupType::Components, "src", json!("javascript:alert(1)"), None)
            .unwrap();
        let html = render_block(&preview(&iframe));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("c-iframe--empty"));

        iframe
            .set_value(FormGroupType::Components, "src", json!("https://www.youtube.com/embed/x"), None)
            .unwrap();
        assert!(render_block(&preview(&iframe)).contains("src=\"https://www.youtube.com/embed/x\""));

        let mut buttons = registry.create(ContentBlockType::Buttons, 0).unwrap();
        buttons
            .set_value(FormGroupType::Components, "label", json!("Meer"), Some(0))
            .unwrap();
        buttons
            .set_value(
                FormGroupType::Components,
                "buttonAction",
                json!({"type": "EXTERNAL_LINK", "value": "javascript:alert(1)"}),
                Some(0),
            )
            .unwrap();
        let html = render_block(&preview(&buttons));
        assert!(html.contains(">Meer</button>"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_anchor_and_header_band() {
        struct Host;
        impl LayoutHost for Host {
            fn header_height(&self, _block: usize) -> Option<f64> {
                Some(64.0)
            }
        }

        let mut config = BlockRegistry::standard()
            .create(ContentBlockType::Hero, 0)
            .unwrap();
        config
            .set_value(FormGroupType::Block, "anchor", json!("start"), None)
            .unwrap();
        let router = Router::default();
        let mut page = PreviewRenderer::new(&router)
            .render_page(std::slice::from_ref(&config))
            .unwrap();
        page.sync(&Host);

        let html = render_block(&page.blocks[0]);
        assert!(html.contains("id=\"start\""));
        assert!(html.contains("background-color:#0F171D;height:64px"));
    }
}
