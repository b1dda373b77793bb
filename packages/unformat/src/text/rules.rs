use std::sync::LazyLock;

use regex::Regex;

use crate::text::category::Category;
use crate::text::style::InlineStyle;

static HEADING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^h[1-6]$").unwrap());

/// What the rules get to see of one element: its lowercased tag name and its
/// parsed inline style.
#[derive(Debug, Clone)]
pub struct ElementFacts<'a> {
    pub tag: &'a str,
    pub style: InlineStyle,
}

impl<'a> ElementFacts<'a> {
    pub fn new(tag: &'a str, style_attr: Option<&str>) -> Self {
        Self {
            tag,
            style: style_attr.map(InlineStyle::parse).unwrap_or_default(),
        }
    }

    fn tag_is(&self, names: &[&str]) -> bool {
        names.contains(&self.tag)
    }
}

/// One row of the detection table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub matches: fn(&ElementFacts<'_>) -> bool,
}

/// Detection table, evaluated against every element of the parsed tree.
///
/// List and link rules only look at the element's own tag: the walk visits
/// every element, so "is or contains a `ul`" holds for the tree exactly when
/// some visited element is a `ul`.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Bold,
        matches: is_bold,
    },
    Rule {
        category: Category::Italic,
        matches: is_italic,
    },
    Rule {
        category: Category::Underline,
        matches: is_underline,
    },
    Rule {
        category: Category::Strikethrough,
        matches: is_strikethrough,
    },
    Rule {
        category: Category::TextColor,
        matches: |el| el.style.declares_value("color"),
    },
    Rule {
        category: Category::BackgroundColor,
        matches: |el| {
            el.style.declares_value("background-color") || el.style.declares_value("background")
        },
    },
    Rule {
        category: Category::FontSize,
        matches: |el| el.style.declares("font-size"),
    },
    Rule {
        category: Category::FontFamily,
        matches: |el| el.style.declares("font-family"),
    },
    Rule {
        category: Category::BulletPoints,
        matches: |el| el.tag == "ul",
    },
    Rule {
        category: Category::NumberedList,
        matches: |el| el.tag == "ol",
    },
    Rule {
        category: Category::Links,
        matches: |el| el.tag == "a",
    },
    Rule {
        category: Category::Headers,
        matches: |el| HEADING_TAG.is_match(el.tag),
    },
    Rule {
        category: Category::TextAlignment,
        matches: |el| el.style.declares("text-align"),
    },
    Rule {
        category: Category::LineHeight,
        matches: |el| el.style.declares("line-height"),
    },
    Rule {
        category: Category::LetterSpacing,
        matches: |el| el.style.declares("letter-spacing"),
    },
    Rule {
        category: Category::TextTransform,
        matches: |el| el.style.declares("text-transform"),
    },
];

fn is_bold(el: &ElementFacts<'_>) -> bool {
    el.tag_is(&["b", "strong"]) || el.style.declares("font-weight")
}

fn is_italic(el: &ElementFacts<'_>) -> bool {
    el.tag_is(&["i", "em"]) || el.style.has_keyword("font-style", "italic")
}

fn is_underline(el: &ElementFacts<'_>) -> bool {
    el.tag == "u" || has_decoration(el, "underline")
}

fn is_strikethrough(el: &ElementFacts<'_>) -> bool {
    el.tag_is(&["s", "strike", "del"]) || has_decoration(el, "line-through")
}

fn has_decoration(el: &ElementFacts<'_>, keyword: &str) -> bool {
    el.style.has_keyword("text-decoration", keyword)
        || el.style.has_keyword("text-decoration-line", keyword)
}

/// Categories matched by a single element, in table order.
pub fn matching_categories<'r>(facts: &'r ElementFacts<'r>) -> impl Iterator<Item = Category> + 'r {
    RULES
        .iter()
        .filter(move |rule| (rule.matches)(facts))
        .map(|rule| rule.category)
}
