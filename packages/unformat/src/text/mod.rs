pub mod category;
pub mod format;
pub mod html;
pub mod rules;
pub mod style;
