//! Fading glyph residue left behind by the falling drops.

/// Cells dimmer than this are cleared.
pub const TRAIL_CUTOFF: f32 = 0.05;

/// A glyph on screen and how brightly it is still lit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailCell {
    pub glyph: char,
    /// 1.0 when freshly drawn, decaying towards zero.
    pub intensity: f32,
}

/// Grid of glyphs that fade a little every frame.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    width: u16,
    height: u16,
    cells: Vec<Option<TrailCell>>,
}

impl Trail {
    /// Create an empty trail covering `width` x `height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at the given position, if lit.
    pub fn get(&self, x: u16, y: u16) -> Option<TrailCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Number of lit cells.
    pub fn lit(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Dim every cell by `amount` (0.0-1.0), dropping the ones that go dark.
    pub fn fade(&mut self, amount: f32) {
        let keep = 1.0 - amount.clamp(0.0, 1.0);
        for slot in &mut self.cells {
            if let Some(cell) = slot {
                cell.intensity *= keep;
                if cell.intensity < TRAIL_CUTOFF {
                    *slot = None;
                }
            }
        }
    }

    /// Draw `glyph` at full intensity. Positions outside the grid are ignored.
    ///
    /// Returns whether the glyph landed on the grid.
    pub fn stamp(&mut self, x: i32, y: i32, glyph: char) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = Some(TrailCell {
            glyph,
            intensity: 1.0,
        });
        true
    }
}
