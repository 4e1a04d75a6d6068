//! Core types shared by the glyphfall crates.
//!
//! Holds the user-facing option enums (color theme, fall speed, glyph set),
//! the cursor position and the tunables that drive the rain animation.

mod error;
mod glyphs;
mod settings;
mod speed;
mod theme;

pub use error::ParseOptionError;
pub use glyphs::GlyphSet;
pub use settings::{Cursor, RainSettings};
pub use speed::FallSpeed;
pub use theme::ColorTheme;
