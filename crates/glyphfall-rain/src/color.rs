//! Color helpers for shading the rain.

use glyphfall_core::ColorTheme;
use ratatui::style::Color;

/// How long the rainbow hue takes to drift a full turn.
const RAINBOW_PERIOD_MS: u64 = 12_000;

/// Base color of a glyph in the given column at full intensity.
pub(crate) fn base_rgb(theme: ColorTheme, x: u16, width: u16, elapsed_ms: u64) -> (u8, u8, u8) {
    match theme {
        ColorTheme::Rainbow => rainbow_rgb(x, width, elapsed_ms),
        _ => theme.rgb(),
    }
}

/// Rainbow color for column `x`: the hue sweeps once across the width and
/// drifts a full turn every [`RAINBOW_PERIOD_MS`].
pub fn rainbow_rgb(x: u16, width: u16, elapsed_ms: u64) -> (u8, u8, u8) {
    let across = x as f32 / width.max(1) as f32;
    let drift = (elapsed_ms % RAINBOW_PERIOD_MS) as f32 / RAINBOW_PERIOD_MS as f32;
    hsl_to_rgb((across + drift) * 360.0, 1.0, 0.5)
}

/// Trail color: the base color dimmed towards black.
pub(crate) fn shade((r, g, b): (u8, u8, u8), intensity: f32) -> Color {
    let i = intensity.clamp(0.0, 1.0);
    Color::Rgb(
        (r as f32 * i) as u8,
        (g as f32 * i) as u8,
        (b as f32 * i) as u8,
    )
}

/// Head color: the base color blended halfway to white.
pub(crate) fn glow((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r / 2 + 128, g / 2 + 128, b / 2 + 128)
}

/// Convert HSL to RGB.
///
/// Hue is in degrees and wraps; saturation and lightness are 0.0-1.0.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h.rem_euclid(360.0) / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let lift = l - chroma / 2.0;

    let (r, g, b) = match sector as u8 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    let to_u8 = |v: f32| ((v + lift) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(60.0, 1.0, 0.5), (255, 255, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(-120.0, 1.0, 0.5), (0, 0, 255));
    }

    #[test]
    fn test_shade_scales_towards_black() {
        assert_eq!(shade((0, 255, 0), 1.0), Color::Rgb(0, 255, 0));
        assert_eq!(shade((0, 255, 0), 0.5), Color::Rgb(0, 127, 0));
        assert_eq!(shade((200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_glow_is_brighter() {
        assert_eq!(glow((0, 255, 0)), Color::Rgb(128, 255, 128));
    }

    #[test]
    fn test_rainbow_varies_by_column() {
        let a = base_rgb(ColorTheme::Rainbow, 0, 90, 0);
        let b = base_rgb(ColorTheme::Rainbow, 30, 90, 0);
        assert_ne!(a, b);
        assert_eq!(a, (255, 0, 0));
        // A third of the width on is a third of the way round the wheel
        assert_eq!(b, (0, 255, 0));
        // Half a drift period later the first column shows the opposite hue
        assert_eq!(rainbow_rgb(0, 90, RAINBOW_PERIOD_MS / 2), (0, 255, 255));
        assert_eq!(base_rgb(ColorTheme::Cyan, 30, 90, 5_000), ColorTheme::Cyan.rgb());
    }
}
