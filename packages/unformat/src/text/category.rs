use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// A kind of formatting that can be detected in rich text and stripped.
///
/// The set is closed. Categories order by their label so a sorted list reads
/// the same way it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    TextColor,
    BackgroundColor,
    FontSize,
    FontFamily,
    BulletPoints,
    NumberedList,
    Links,
    Headers,
    TextAlignment,
    LineHeight,
    LetterSpacing,
    TextTransform,
    /// Structural markup (paragraphs, line breaks, entities) that none of the
    /// named categories account for.
    Structure,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Bold,
        Category::Italic,
        Category::Underline,
        Category::Strikethrough,
        Category::TextColor,
        Category::BackgroundColor,
        Category::FontSize,
        Category::FontFamily,
        Category::BulletPoints,
        Category::NumberedList,
        Category::Links,
        Category::Headers,
        Category::TextAlignment,
        Category::LineHeight,
        Category::LetterSpacing,
        Category::TextTransform,
        Category::Structure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Bold => "Bold",
            Category::Italic => "Italic",
            Category::Underline => "Underline",
            Category::Strikethrough => "Strikethrough",
            Category::TextColor => "Text color",
            Category::BackgroundColor => "Background color/Highlight",
            Category::FontSize => "Font size",
            Category::FontFamily => "Font family",
            Category::BulletPoints => "Bullet points",
            Category::NumberedList => "Numbered list",
            Category::Links => "Links",
            Category::Headers => "Headers",
            Category::TextAlignment => "Text alignment",
            Category::LineHeight => "Line height",
            Category::LetterSpacing => "Letter spacing",
            Category::TextTransform => "Text transform",
            Category::Structure => "HTML/Structure formatting",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
