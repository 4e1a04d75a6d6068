//! Per-column drop positions and the frame step that advances them.

use glyphfall_core::{Cursor, RainSettings};
use rand::Rng;

use crate::repel::Repulsion;
use crate::trail::Trail;

/// Where every column starts, measured in rows to the glyph baseline.
const START_DROP: f32 = 1.0;

/// Minimum distance a drop falls per frame, in rows.
const BASE_ADVANCE: f32 = 0.2;

/// Random extra added on top of [`BASE_ADVANCE`].
const ADVANCE_JITTER: f32 = 0.1;

/// Number of rain columns that fit in `width` cells.
pub fn column_count(width: u16, spacing: u16) -> usize {
    width.div_ceil(spacing.max(1)) as usize
}

/// Fall positions for every rain column.
#[derive(Debug, Clone, Default)]
pub struct RainField {
    /// Baseline row of each column's current glyph.
    drops: Vec<f32>,
    width: u16,
    height: u16,
    spacing: u16,
}

impl RainField {
    /// Lay out columns for the given area with every drop at the top.
    pub fn new(width: u16, height: u16, spacing: u16) -> Self {
        let spacing = spacing.max(1);
        Self {
            drops: vec![START_DROP; column_count(width, spacing)],
            width,
            height,
            spacing,
        }
    }

    pub fn drops(&self) -> &[f32] {
        &self.drops
    }

    /// Whether this field was laid out for the given area and spacing.
    pub fn fits(&self, width: u16, height: u16, spacing: u16) -> bool {
        self.width == width && self.height == height && self.spacing == spacing.max(1)
    }

    /// Run one animation frame: fade the trail, draw a glyph per column and
    /// move every drop down.
    pub fn step<R: Rng>(
        &mut self,
        trail: &mut Trail,
        rng: &mut R,
        settings: &RainSettings,
        cursor: Option<Cursor>,
    ) {
        trail.fade(settings.fade);

        let glyphs = settings.glyphs.chars();
        let repulsion = Repulsion::new(settings.cursor_radius, settings.cursor_strength);
        let advance = settings.speed.multiplier();
        let height = self.height as f32;
        let spacing = self.spacing as f32;

        for (i, drop) in self.drops.iter_mut().enumerate() {
            let glyph = glyphs[rng.random_range(0..glyphs.len())];

            // The drop marks the glyph baseline, so it occupies the row above.
            let x = i as f32 * spacing;
            let row = drop.floor() - 1.0;

            let (ox, oy) = cursor
                .map(|c| repulsion.offset(x - c.column as f32, row - c.row as f32))
                .unwrap_or((0.0, 0.0));
            trail.stamp((x + ox).round() as i32, (row + oy).round() as i32, glyph);

            // Past the bottom, restart at random so columns fall out of step
            if *drop > height && rng.random::<f32>() < settings.reset_chance {
                *drop = 0.0;
            }

            *drop += (BASE_ADVANCE + rng.random::<f32>() * ADVANCE_JITTER) * advance;
        }
    }
}
