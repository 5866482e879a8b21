use crate::colors::{GlyphSet, LevelStyle, RESET};
use crate::formatters::template::Template;
use crate::level::Label;
use chrono::NaiveDateTime;

/// Everything a template can pull into a rendered prefix
#[derive(Debug, Clone)]
pub struct LogEvent<'a> {
    pub time: NaiveDateTime,
    pub label: Label,
    pub module: &'a str,
    pub color: bool,
    pub glyphs: GlyphSet,
}

/// A rendered prefix. `coloring` is true when the template turned color on
/// with `%c` and never turned it off again, so the caller owes a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub prefix: String,
    pub coloring: bool,
}

impl Template {
    pub fn render(&self, event: &LogEvent<'_>) -> Rendered {
        let style = LevelStyle::for_label(event.label, event.glyphs);
        let mut prefix = String::with_capacity(self.as_str().len() + 32);
        let mut coloring = false;
        let mut rest = self.as_str();

        loop {
            let Some(pos) = rest.find('%') else {
                prefix.push_str(rest);
                break;
            };
            let mut tail = rest[pos + 1..].chars();
            let Some(token) = tail.next() else {
                // Lone trailing '%'
                prefix.push_str(rest);
                break;
            };

            prefix.push_str(&rest[..pos]);
            match token {
                't' => prefix.push_str(&event.time.format("%Y-%m-%dT%H:%M:%S").to_string()),
                'l' => prefix.push_str(event.label.padded()),
                'm' => prefix.push_str(event.module),
                'c' => {
                    if event.color {
                        prefix.push_str(style.color);
                        coloring = true;
                    }
                }
                'C' => {
                    if event.color {
                        prefix.push_str(RESET);
                        coloring = false;
                    }
                }
                'L' => {
                    if event.color {
                        prefix.push_str(style.glyph);
                    }
                }
                // Unknown selectors keep the '%' and lose the selector
                _ => prefix.push('%'),
            }
            rest = tail.as_str();
        }

        Rendered { prefix, coloring }
    }
}
