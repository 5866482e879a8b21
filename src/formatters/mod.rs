//! Prefix formatting: format templates and the token renderer

pub mod prefix;
pub mod template;

pub use prefix::{LogEvent, Rendered};
pub use template::{FormatStack, Template, DEFAULT_FORMAT};
