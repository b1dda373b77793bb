use std::collections::BTreeSet;

use scraper::{Html, Node};

use crate::text::category::Category;
use crate::text::rules::{matching_categories, ElementFacts};

/// Elements whose boundaries separate words in rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "ul",
];

/// Raw text content of a fragment plus every category its elements triggered.
#[derive(Debug, Default)]
pub struct Extraction {
    pub text: String,
    pub categories: BTreeSet<Category>,
}

/// Parse `input` as an HTML fragment and walk it once, collecting text nodes
/// in document order and running the detection rules on every element.
///
/// Parsing is html5ever's error-recovering tree builder, so unclosed or
/// unknown tags never abort; their text is still collected. The walk uses an
/// explicit stack, so nesting depth is bounded only by memory.
pub fn extract(input: &str) -> Extraction {
    // Nothing for the parser to do without tags or entities.
    if !input.contains('<') && !input.contains('&') {
        return Extraction {
            text: input.to_string(),
            categories: BTreeSet::new(),
        };
    }

    let document = Html::parse_fragment(input);
    let mut out = Extraction::default();

    // `None` marks the end of a block element.
    let mut stack = vec![Some(document.tree.root())];
    while let Some(step) = stack.pop() {
        let Some(node) = step else {
            out.text.push(' ');
            continue;
        };

        match node.value() {
            Node::Text(text) => out.text.push_str(text),
            Node::Element(el) => {
                let tag = el.name();
                let facts = ElementFacts::new(tag, el.attr("style"));
                out.categories.extend(matching_categories(&facts));

                if BLOCK_TAGS.contains(&tag) {
                    out.text.push(' ');
                    stack.push(None);
                }
            }
            _ => {}
        }

        stack.extend(node.children().rev().map(Some));
    }

    out
}

/// Strip HTML tags, decode entities, and normalize whitespace.
pub fn strip_html(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    normalize_whitespace(&extract(input).text)
}

/// Collapse every whitespace run to one space and trim both ends.
///
/// Covers Unicode White_Space (so a decoded `&nbsp;` counts) and U+FEFF.
pub fn normalize_whitespace(s: &str) -> String {
    s.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
