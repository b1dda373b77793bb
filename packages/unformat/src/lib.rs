//! Strip every kind of formatting from pasted rich text and report what was
//! removed.
//!
//! ```
//! let result = proseva_unformat::format("<b>hi</b>   there");
//! assert_eq!(result.plain_text, "hi there");
//! assert_eq!(result.labels(), vec!["Bold"]);
//! ```

pub mod paste;
pub mod telemetry;
pub mod text;

pub use paste::Paste;
pub use text::category::Category;
pub use text::format::{format, FormatResult};
pub use text::html::strip_html;
