//! Rain animation state management.

use std::time::Duration;

use glyphfall_core::{Cursor, RainSettings};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::color::{base_rgb, glow, shade};
use crate::field::RainField;
use crate::trail::Trail;

/// Animation time per frame step (~60 steps per second).
pub const FRAME_MS: u64 = 16;

/// Steps a render may run beyond those due in one redraw interval.
pub const MAX_CATCHUP_STEPS: u64 = 4;

/// Rain animation state.
#[derive(Debug)]
pub struct RainState {
    /// Drop positions per column.
    field: RainField,
    /// Glyphs drawn so far, fading out.
    trail: Trail,
    rng: StdRng,
    /// Animation time at the previous render.
    last_update_ms: u64,
    /// Elapsed time not yet consumed by a step.
    pending_ms: u64,
    /// Most steps a single render will run.
    max_steps: u64,
}

impl Default for RainState {
    fn default() -> Self {
        Self::new()
    }
}

impl RainState {
    /// Create a new rain state seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a rain state with reproducible randomness.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            field: RainField::default(),
            trail: Trail::default(),
            rng,
            last_update_ms: 0,
            pending_ms: 0,
            max_steps: MAX_CATCHUP_STEPS,
        }
    }

    /// Tell the state how often it gets rendered.
    ///
    /// A render may run every step due in one interval plus
    /// [`MAX_CATCHUP_STEPS`], so slow redraws do not slow the rain. Longer
    /// stalls are still dropped.
    pub fn set_redraw_interval(&mut self, interval: Duration) {
        let interval_ms = interval.as_millis() as u64;
        self.max_steps = interval_ms.div_ceil(FRAME_MS) + MAX_CATCHUP_STEPS;
    }

    pub fn drops(&self) -> &[f32] {
        self.field.drops()
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Render the rain to the frame.
    ///
    /// `elapsed_ms` is the animation clock; holding it still freezes the rain.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        elapsed_ms: u64,
        settings: &RainSettings,
        cursor: Option<Cursor>,
    ) {
        let area = frame.area();
        if area.is_empty() {
            return;
        }

        self.update(area.width, area.height, elapsed_ms, settings, cursor);

        let paragraph = Paragraph::new(self.lines(settings, elapsed_ms))
            .style(Style::new().bg(Color::Black));
        frame.render_widget(paragraph, area);
    }

    /// Advance the animation to `elapsed_ms` for an area of the given size.
    ///
    /// Returns the number of frame steps that ran. A zero-sized area is
    /// ignored entirely.
    pub fn update(
        &mut self,
        width: u16,
        height: u16,
        elapsed_ms: u64,
        settings: &RainSettings,
        cursor: Option<Cursor>,
    ) -> u64 {
        if width == 0 || height == 0 {
            return 0;
        }

        // Reinitialize if dimensions or column layout changed
        if !self.field.fits(width, height, settings.column_spacing) {
            self.field = RainField::new(width, height, settings.column_spacing);
            self.trail = Trail::new(width, height);
        }

        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;
        self.pending_ms += delta_ms;

        let steps = (self.pending_ms / FRAME_MS).min(self.max_steps);
        self.pending_ms %= FRAME_MS;

        for _ in 0..steps {
            self.field.step(&mut self.trail, &mut self.rng, settings, cursor);
        }
        steps
    }

    /// Styled lines for the current trail.
    pub fn lines(&self, settings: &RainSettings, elapsed_ms: u64) -> Vec<Line<'static>> {
        let width = self.trail.width();
        (0..self.trail.height())
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| self.render_char(x, y, width, settings, elapsed_ms))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Render a single trail cell.
    fn render_char(
        &self,
        x: u16,
        y: u16,
        width: u16,
        settings: &RainSettings,
        elapsed_ms: u64,
    ) -> Span<'static> {
        let Some(cell) = self.trail.get(x, y) else {
            return Span::raw(" ");
        };

        let base = base_rgb(settings.theme, x, width, elapsed_ms);
        let style = if cell.intensity >= 1.0 {
            // Freshly drawn head glows
            Style::new().fg(glow(base)).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(shade(base, cell.intensity))
        };

        Span::styled(cell.glyph.to_string(), style)
    }
}
