//! Navigation: turning button actions into links.

use crate::config::{normalize_base_url, Config, RoutesConfig};
use crate::models::{ButtonAction, ButtonActionType};
use regex::{Captures, Regex};
use std::sync::OnceLock;

static PARAM_REGEX: OnceLock<Regex> = OnceLock::new();

fn param_regex() -> &'static Regex {
    PARAM_REGEX.get_or_init(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").unwrap())
}

/// Routing service used by display components
pub trait Navigator {
    /// Link for an action, `None` when the action cannot be routed
    fn href(&self, action: &ButtonAction) -> Option<String>;
}

/// Whether a link may be placed in an `href` or `src` as-is
///
/// Only `http`, `https`, `mailto` and in-page `#` links pass.
pub fn is_safe_link(link: &str) -> bool {
    let link = link.trim();
    if link.starts_with('#') {
        return true;
    }
    match link.split_once(':') {
        Some((scheme, _)) => {
            let scheme = scheme.to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        None => false,
    }
}

/// Fill the `:name` parameters of a path template
///
/// Values are percent-encoded; parameters without a value stay as-is.
pub fn build_link(template: &str, params: &[(&str, &str)]) -> String {
    param_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| urlencoding::encode(value).into_owned())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Navigator for the learner-facing app's path templates
#[derive(Debug, Clone)]
pub struct Router {
    routes: RoutesConfig,
    base_url: String,
}

impl Router {
    pub fn new(routes: RoutesConfig, base_url: &str) -> Self {
        Self {
            routes,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.routes.clone(), &config.site.base_url)
    }

    /// Prefix an app path with the base url
    fn app_path(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RoutesConfig::default(), "/")
    }
}

impl Navigator for Router {
    fn href(&self, action: &ButtonAction) -> Option<String> {
        let value = action.value_str();
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let href = match action.action_type {
            ButtonActionType::ContentPage | ButtonActionType::InternalLink => self.app_path(value),
            ButtonActionType::ExternalLink => {
                if !is_safe_link(value) {
                    tracing::warn!("Refusing external link with unsupported scheme: {}", value);
                    return None;
                }
                value.to_string()
            }
            ButtonActionType::AnchorLink => format!("#{}", value.trim_start_matches('#')),
            ButtonActionType::Item => self.app_path(&build_link(&self.routes.item, &[("id", value)])),
            ButtonActionType::Collection => {
                self.app_path(&build_link(&self.routes.collection, &[("id", value)]))
            }
            ButtonActionType::Bundle => {
                self.app_path(&build_link(&self.routes.bundle, &[("id", value)]))
            }
            ButtonActionType::SearchQuery => format!(
                "{}?filters={}",
                self.app_path(&self.routes.search),
                urlencoding::encode(value)
            ),
        };
        Some(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn action(action_type: ButtonActionType, value: serde_json::Value) -> ButtonAction {
        ButtonAction { action_type, value }
    }

    #[test]
    fn test_build_link() {
        assert_eq!(build_link("/item/:id", &[("id", "abc")]), "/item/abc");
        assert_eq!(
            build_link("/a/:id/b/:tab", &[("id", "x y"), ("tab", "2")]),
            "/a/x%20y/b/2"
        );
        assert_eq!(build_link("/a/:missing", &[]), "/a/:missing");
    }

    #[test]
    fn test_router_hrefs() {
        let router = Router::default();
        assert_eq!(
            router.href(&action(ButtonActionType::Item, json!("8k74v0sk3c"))),
            Some("/item/8k74v0sk3c".into())
        );
        assert_eq!(
            router.href(&action(ButtonActionType::ContentPage, json!("/over-ons"))),
            Some("/over-ons".into())
        );
        assert_eq!(
            router.href(&action(ButtonActionType::AnchorLink, json!("vakken"))),
            Some("#vakken".into())
        );
        assert_eq!(
            router.href(&action(ButtonActionType::ExternalLink, json!("https://meemoo.be"))),
            Some("https://meemoo.be".into())
        );
        assert_eq!(
            router.href(&action(ButtonActionType::SearchQuery, json!("{\"query\":\"kunst\"}"))),
            Some("/zoeken?filters=%7B%22query%22%3A%22kunst%22%7D".into())
        );
        assert_eq!(router.href(&action(ButtonActionType::Item, json!(" "))), None);
    }

    #[test]
    fn test_external_links_need_a_known_scheme() {
        let router = Router::default();
        assert_eq!(
            router.href(&action(ButtonActionType::ExternalLink, json!("javascript:alert(1)"))),
            None
        );
        assert_eq!(
            router.href(&action(ButtonActionType::ExternalLink, json!("JavaScript:alert(1)"))),
            None
        );
        assert_eq!(
            router.href(&action(ButtonActionType::ExternalLink, json!("mailto:info@meemoo.be"))),
            Some("mailto:info@meemoo.be".into())
        );
        assert!(is_safe_link("#vakken"));
        assert!(is_safe_link("HTTPS://meemoo.be"));
        assert!(!is_safe_link("data:text/html,x"));
        assert!(!is_safe_link("meemoo.be"));
    }

    #[test]
    fn test_router_respects_base_url_and_numeric_ids() {
        let router = Router::new(RoutesConfig::default(), "onderwijs");
        assert_eq!(
            router.href(&action(ButtonActionType::Collection, json!(42))),
            Some("/onderwijs/collecties/42".into())
        );
    }
}
