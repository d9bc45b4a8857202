//! Slug generation for anchors and generated element ids.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

static HYPHEN_RUN: OnceLock<Regex> = OnceLock::new();

/// Convert a string to a URL-safe slug
///
/// Rules:
/// - Lowercase
/// - Replace whitespace and underscores with hyphens
/// - Remove special characters (except hyphens)
/// - Collapse multiple hyphens
/// - Trim leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use avo_core::slugify;
///
/// assert_eq!(slugify("Over ons"), "over-ons");
/// assert_eq!(slugify("Vakken & Thema's"), "vakken-themas");
/// ```
pub fn slugify(input: &str) -> String {
    let lowercased = input.to_lowercase();

    let cleaned = lowercased
        .graphemes(true)
        .filter_map(|g| match g {
            " " | "_" | "\t" | "\n" => Some("-"),
            _ => {
                let c = g.chars().next()?;
                (c.is_ascii_alphanumeric() || c == '-' || c.is_alphabetic()).then_some(g)
            }
        })
        .collect::<String>();

    let re = HYPHEN_RUN.get_or_init(|| Regex::new(r"-+").unwrap());
    re.replace_all(&cleaned, "-").trim_matches('-').to_string()
}

/// Element id for a form control: `<group>-<position>-<field>[-<index>]`
pub fn element_id(group: &str, position: usize, key: &str, index: Option<usize>) -> String {
    let base = format!("{}-{}-{}", group, position, slugify(key));
    match index {
        Some(i) => format!("{}-{}", base, i),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Over ons"), "over-ons");
        assert_eq!(slugify("Nieuwe Collecties"), "nieuwe-collecties");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("Vakken & Thema's"), "vakken-themas");
        assert_eq!(slugify("Wat is nieuw?"), "wat-is-nieuw");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(slugify("Café"), "café");
        assert_eq!(slugify("geïnspireerd"), "geïnspireerd");
    }

    #[test]
    fn test_hyphen_cleanup() {
        assert_eq!(slugify("  Over   ons  "), "over-ons");
        assert_eq!(slugify("-anker-"), "anker");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_element_id() {
        assert_eq!(element_id("block", 2, "backgroundColor", None), "block-2-backgroundcolor");
        assert_eq!(element_id("components", 0, "title", Some(3)), "components-0-title-3");
    }
}
