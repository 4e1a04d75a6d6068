//! Animation tunables and the cursor position.

use crate::{ColorTheme, FallSpeed, GlyphSet};

/// Cursor position in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub column: u16,
    pub row: u16,
}

impl Cursor {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Everything that shapes how the rain looks and moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSettings {
    pub theme: ColorTheme,
    pub speed: FallSpeed,
    pub glyphs: GlyphSet,
    /// Horizontal distance between rain columns, in cells.
    pub column_spacing: u16,
    /// Distance (in columns) beyond which the cursor has no effect.
    pub cursor_radius: f32,
    /// Fraction of the distance to the cursor a glyph is pushed by.
    pub cursor_strength: f32,
    /// Fraction of intensity the trail loses each frame.
    pub fade: f32,
    /// Per-frame probability that an off-screen drop restarts at the top.
    pub reset_chance: f32,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            speed: FallSpeed::default(),
            glyphs: GlyphSet::default(),
            column_spacing: 1,
            cursor_radius: 12.0,
            cursor_strength: 0.6,
            fade: 0.1,
            reset_chance: 0.025,
        }
    }
}
