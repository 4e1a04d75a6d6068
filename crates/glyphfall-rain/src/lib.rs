//! Digital rain animation for the terminal.
//!
//! Glyphs fall in columns, leave a fading trail behind them and are nudged
//! away from the mouse cursor when it comes close. [`RainState`] owns the
//! whole animation and renders it into a ratatui frame.

mod color;
mod field;
mod repel;
mod state;
mod trail;

pub use color::{hsl_to_rgb, rainbow_rgb};
pub use field::{RainField, column_count};
pub use repel::{ASPECT, Repulsion};
pub use state::{FRAME_MS, MAX_CATCHUP_STEPS, RainState};
pub use trail::{TRAIL_CUTOFF, Trail, TrailCell};
