//! Glyph alphabets the rain draws from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseOptionError, parse_named};

/// Latin letters, digits and symbols. Repeated symbols weight the draw.
const CLASSIC_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '1', '2', '3', '4', '5',
    '6', '7', '8', '9', '@', '#', '$', '%', '^', '&', '*', '(', ')', '*', '&', '^', '%',
];

/// Half-width katakana and digits; every glyph occupies one terminal cell.
const KATAKANA_CHARS: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ', 'ﾃ',
    'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ', 'ﾓ', 'ﾔ', 'ﾕ', 'ﾖ',
    'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ', 'ﾝ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

const BINARY_CHARS: &[char] = &['0', '1'];

/// Which alphabet the falling glyphs are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Classic,
    Katakana,
    Binary,
}

impl GlyphSet {
    /// Every glyph set, in cycling order.
    pub const ALL: [GlyphSet; 3] = [GlyphSet::Classic, GlyphSet::Katakana, GlyphSet::Binary];

    /// The glyphs of this set. Never empty.
    pub fn chars(self) -> &'static [char] {
        match self {
            GlyphSet::Classic => CLASSIC_CHARS,
            GlyphSet::Katakana => KATAKANA_CHARS,
            GlyphSet::Binary => BINARY_CHARS,
        }
    }

    /// Cycle to the next glyph set.
    pub fn next(self) -> Self {
        match self {
            GlyphSet::Classic => GlyphSet::Katakana,
            GlyphSet::Katakana => GlyphSet::Binary,
            GlyphSet::Binary => GlyphSet::Classic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GlyphSet::Classic => "classic",
            GlyphSet::Katakana => "katakana",
            GlyphSet::Binary => "binary",
        }
    }
}

impl fmt::Display for GlyphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlyphSet {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("glyph set", s, &Self::ALL, Self::name)
    }
}
