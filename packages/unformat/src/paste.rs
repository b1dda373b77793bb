use crate::text::format::{format, FormatResult};

/// The flavors a clipboard paste can carry.
///
/// A rich-text copy usually offers both a `text/html` and a `text/plain`
/// payload. The markup flavor is the one that still shows what formatting was
/// there, so it wins whenever it has content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paste {
    pub html: Option<String>,
    pub plain: Option<String>,
}

impl Paste {
    pub fn new(html: Option<String>, plain: Option<String>) -> Self {
        Self { html, plain }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            html: None,
            plain: Some(text.into()),
        }
    }

    /// The payload to format: non-empty markup first, then plain text, then "".
    pub fn preferred(&self) -> &str {
        [&self.html, &self.plain]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.preferred().is_empty()
    }

    pub fn format(&self) -> FormatResult {
        format(self.preferred())
    }
}
