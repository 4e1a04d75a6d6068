//! Color themes for the falling glyphs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseOptionError, parse_named};

/// Color theme for the rain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Green,
    Cyan,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
    /// Hue varies per column and drifts over time.
    Rainbow,
}

impl ColorTheme {
    /// Every theme, in cycling order.
    pub const ALL: [ColorTheme; 8] = [
        ColorTheme::Green,
        ColorTheme::Cyan,
        ColorTheme::White,
        ColorTheme::Magenta,
        ColorTheme::Yellow,
        ColorTheme::Red,
        ColorTheme::Blue,
        ColorTheme::Rainbow,
    ];

    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Green => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::White,
            ColorTheme::White => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::Rainbow,
            ColorTheme::Rainbow => ColorTheme::Green,
        }
    }

    /// Base color at full intensity.
    ///
    /// `Rainbow` reports plain green here; the renderer derives its hue per column.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Green | ColorTheme::Rainbow => (0, 255, 0),
            ColorTheme::Cyan => (0, 255, 255),
            ColorTheme::White => (230, 230, 230),
            ColorTheme::Magenta => (255, 0, 255),
            ColorTheme::Yellow => (255, 230, 0),
            ColorTheme::Red => (255, 40, 40),
            ColorTheme::Blue => (60, 120, 255),
        }
    }

    /// Lowercase name, as used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Green => "green",
            ColorTheme::Cyan => "cyan",
            ColorTheme::White => "white",
            ColorTheme::Magenta => "magenta",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Red => "red",
            ColorTheme::Blue => "blue",
            ColorTheme::Rainbow => "rainbow",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorTheme {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("color theme", s, &Self::ALL, Self::name)
    }
}
