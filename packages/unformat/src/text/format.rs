use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::text::category::Category;
use crate::text::html::{extract, normalize_whitespace};

/// Signals that raw input carried structure even when no named rule fired:
/// a tag opener, a non-breaking-space entity, or a blank line.
static STRUCTURE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<|&nbsp;|\n\n").unwrap());

/// Plain text plus the formatting categories that were removed to get it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    pub plain_text: String,
    /// Sorted by label, no duplicates.
    pub categories: Vec<Category>,
}

impl FormatResult {
    pub fn labels(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.label()).collect()
    }

    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// Remove all formatting from `input`.
///
/// Never fails: malformed markup is parsed leniently and whatever text it
/// holds ends up in the result.
pub fn format(input: &str) -> FormatResult {
    let extraction = extract(input);
    let plain_text = normalize_whitespace(&extraction.text);
    let mut categories = extraction.categories;

    if categories.is_empty()
        && plain_text != input.trim()
        && STRUCTURE_MARKER.is_match(input)
    {
        tracing::debug!("no named formatting found, reporting structural markup");
        categories.insert(Category::Structure);
    }

    tracing::debug!(
        input_len = input.len(),
        output_len = plain_text.len(),
        categories = categories.len(),
        "formatted input"
    );

    FormatResult {
        plain_text,
        categories: categories.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(input: &str) -> Vec<&'static str> {
        format(input).labels()
    }

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "hello   world",
        "<b>hi</b> there",
        "<span style=\"color: red; font-size: 14px\">x</span>",
        "<ul><li>a</li><li>b</li></ul>",
        "<p>a</p><p>b</p>",
        "line one\n\nline two",
        "a&nbsp;b",
        "<ol><li><a href=\"https://example.com\">one</a></li></ol>",
        "<h1 style=\"text-align:center\">Title</h1>\n<p style=\"line-height: 2\">body</p>",
        "<div><b>unclosed <i>nesting</div>",
        "3 < 4 and 5 > 2",
        "\t tabs\tand\r\nnewlines \u{a0}",
    ];

    #[test]
    fn test_empty_input() {
        let result = format("");
        assert_eq!(result.plain_text, "");
        assert!(result.categories.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let result = format(" \n\t\n\n ");
        assert_eq!(result.plain_text, "");
        assert!(result.categories.is_empty());
    }

    #[test]
    fn test_plain_input_unchanged() {
        let result = format("hello   world");
        assert_eq!(result.plain_text, "hello world");
        assert!(result.categories.is_empty());

        let result = format("  already clean  ");
        assert_eq!(result.plain_text, "already clean");
        assert!(result.categories.is_empty());
    }

    #[test]
    fn test_bold_detection() {
        let result = format("<b>hi</b> there");
        assert_eq!(result.plain_text, "hi there");
        assert_eq!(result.labels(), vec!["Bold"]);
    }

    #[test]
    fn test_styled_span() {
        let result = format("<span style=\"color: red; font-size: 14px\">x</span>");
        assert_eq!(result.plain_text, "x");
        assert!(result.has(Category::TextColor));
        assert!(result.has(Category::FontSize));
    }

    #[test]
    fn test_list_detection() {
        let result = format("<ul><li>a</li><li>b</li></ul>");
        assert_eq!(result.plain_text, "a b");
        assert!(result.has(Category::BulletPoints));
    }

    #[test]
    fn test_numbered_list_with_link() {
        assert_eq!(
            labels("<ol><li><a href=\"https://example.com\">one</a></li></ol>"),
            vec!["Links", "Numbered list"]
        );
    }

    #[test]
    fn test_structure_fallback_for_paragraphs() {
        let result = format("<p>a</p><p>b</p>");
        assert_eq!(result.labels(), vec!["HTML/Structure formatting"]);
    }

    #[test]
    fn test_structure_fallback_for_blank_lines_and_nbsp() {
        assert_eq!(labels("line one\n\nline two"), vec!["HTML/Structure formatting"]);
        assert_eq!(labels("a&nbsp;b"), vec!["HTML/Structure formatting"]);
    }

    #[test]
    fn test_fallback_needs_a_marker() {
        // Output differs from input but there is no tag, entity or blank line.
        assert!(labels("a\t\tb").is_empty());
        assert!(labels("a\nb").is_empty());
    }

    #[test]
    fn test_fallback_needs_a_difference() {
        // A literal `<` that survives untouched is not structure.
        assert!(labels("3 < 4").is_empty());
    }

    #[test]
    fn test_fallback_suppressed_by_named_category() {
        assert_eq!(labels("<p><em>a</em></p><p>b</p>"), vec!["Italic"]);
    }

    #[test]
    fn test_categories_sorted_and_unique() {
        let result = format(
            "<h1 style=\"text-align:center\">Title</h1><b>x</b><strong>y</strong>\
             <span style=\"font-weight:bold; background: yellow\">z</span>",
        );
        assert_eq!(
            result.labels(),
            vec!["Background color/Highlight", "Bold", "Headers", "Text alignment"]
        );
    }

    #[test]
    fn test_all_style_categories() {
        let input = "<span style=\"font-style: italic; text-decoration: underline; \
                     font-family: serif; letter-spacing: 1px; text-transform: uppercase; \
                     line-height: 2\">x</span><del>y</del>";
        assert_eq!(
            labels(input),
            vec![
                "Font family",
                "Italic",
                "Letter spacing",
                "Line height",
                "Strikethrough",
                "Text transform",
                "Underline",
            ]
        );
    }

    #[test]
    fn test_literal_angle_brackets_preserved() {
        assert_eq!(format("3 < 4 and 5 > 2").plain_text, "3 < 4 and 5 > 2");
        assert_eq!(format("<b>x</b> &lt;tag&gt;").plain_text, "x <tag>");
    }

    #[test]
    fn test_whitespace_collapse_property() {
        for input in SAMPLES {
            let text = format(input).plain_text;
            assert!(!text.contains("  "), "{input:?} -> {text:?}");
            assert_eq!(text, text.trim(), "{input:?}");
            assert!(!text.contains(&['\n', '\t', '\r', '\u{a0}'][..]), "{input:?}");
        }
    }

    #[test]
    fn test_idempotence_property() {
        for input in SAMPLES {
            let once = format(input).plain_text;
            let twice = format(&once).plain_text;
            assert_eq!(once, twice, "{input:?}");
        }
    }

    #[test]
    fn test_plain_text_is_fixed_point_without_categories() {
        for input in SAMPLES {
            let once = format(input).plain_text;
            assert!(format(&once).categories.is_empty(), "{input:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        for input in SAMPLES {
            assert_eq!(format(input), format(input));
        }
    }

    #[test]
    fn test_serializes_like_the_ui_contract() {
        let json = serde_json::to_value(format("<b>hi</b> there")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "plainText": "hi there", "categories": ["Bold"] })
        );
    }
}
