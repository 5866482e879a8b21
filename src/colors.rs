use crate::level::Label;
use serde::Deserialize;

/// Reset to default color
pub const RESET: &str = "\x1b[0m";

/// Which glyph each label gets for the `%L` token. The two sets only
/// differ for DEBUG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    /// DEBUG shares INFO's filled star
    Classic,
    /// DEBUG gets a hollow star
    #[default]
    Pocket,
}

/// Glyph and ANSI color for one label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub glyph: &'static str,
    pub color: &'static str,
}

impl LevelStyle {
    pub fn for_label(label: Label, glyphs: GlyphSet) -> Self {
        match label {
            Label::Error => LevelStyle { glyph: "\u{2717} ", color: "\x1b[31m" }, // Red
            Label::Warn => LevelStyle { glyph: "\u{2691} ", color: "\x1b[33m" },  // Yellow
            Label::Info => LevelStyle { glyph: "\u{2605} ", color: "\x1b[36m" },  // Cyan
            Label::Aced => LevelStyle { glyph: "\u{2713} ", color: "\x1b[32m" },  // Green
            Label::Debug => LevelStyle {
                glyph: match glyphs {
                    GlyphSet::Classic => "\u{2605} ",
                    GlyphSet::Pocket => "\u{2606} ",
                },
                color: "\x1b[34m", // Blue
            },
        }
    }
}
