use crate::error::ConsoleError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const DEFAULT_FORMAT: &str = "%t %c[%L%l]%C [%m] ";

// Space through tilde, nothing else
static PRINTABLE_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ -~]*$").unwrap());

/// A validated prefix format template.
///
/// Tokens are two characters, `%` plus a selector:
/// `%t` time, `%l` level label, `%L` level glyph, `%m` module name,
/// `%c` color on, `%C` color off. Any other selector renders as a bare `%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(source: &str) -> Result<Self, ConsoleError> {
        if PRINTABLE_ASCII.is_match(source) {
            Ok(Template(source.to_string()))
        } else {
            Err(ConsoleError::InvalidFormat(source.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Template {
    fn default() -> Self {
        Template(DEFAULT_FORMAT.to_string())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The active template plus the templates saved by earlier pushes.
#[derive(Debug, Clone, Default)]
pub struct FormatStack {
    current: Template,
    saved: Vec<Template>,
}

impl FormatStack {
    pub fn new(current: Template) -> Self {
        Self {
            current,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> &Template {
        &self.current
    }

    pub fn set(&mut self, template: Template) {
        self.current = template;
    }

    /// Saves the active template and installs `template`. The save happens
    /// even when `template` is `None` so pushes and pops stay paired.
    pub fn push(&mut self, template: Option<Template>) {
        self.saved.push(self.current.clone());
        if let Some(template) = template {
            self.current = template;
        }
    }

    /// Restores the last saved template. Returns false when nothing was saved.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
