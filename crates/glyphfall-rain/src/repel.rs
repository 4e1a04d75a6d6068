//! Cursor proximity offset.

/// Height-to-width ratio of a terminal cell.
///
/// Rows are scaled by this when measuring distance so the area of effect
/// looks round on screen.
pub const ASPECT: f32 = 2.0;

/// Pushes glyphs away from the cursor, fading out with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    /// Distance at which the push reaches zero, in columns.
    pub radius: f32,
    /// Scale applied to the displacement vector.
    pub strength: f32,
}

impl Repulsion {
    pub fn new(radius: f32, strength: f32) -> Self {
        Self { radius, strength }
    }

    /// Offset for a glyph displaced `(dx, dy)` cells from the cursor.
    ///
    /// The result points away from the cursor and is zero once the glyph is
    /// `radius` or further away.
    pub fn offset(&self, dx: f32, dy: f32) -> (f32, f32) {
        if self.radius <= 0.0 {
            return (0.0, 0.0);
        }

        let dy_scaled = dy * ASPECT;
        let distance = (dx * dx + dy_scaled * dy_scaled).sqrt();
        let push = (1.0 - distance / self.radius).max(0.0);

        (dx * push * self.strength, dy * push * self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_push_outside_radius() {
        let r = Repulsion::new(10.0, 0.5);
        assert_eq!(r.offset(10.0, 0.0), (0.0, 0.0));
        assert_eq!(r.offset(0.0, 5.0), (0.0, 0.0)); // 5 rows = 10 columns
        assert_eq!(r.offset(-30.0, 12.0), (0.0, 0.0));
    }

    #[test]
    fn test_no_push_under_cursor() {
        let r = Repulsion::new(10.0, 0.5);
        assert_eq!(r.offset(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_push_points_away() {
        let r = Repulsion::new(10.0, 0.5);

        let (ox, oy) = r.offset(4.0, 0.0);
        assert!(ox > 0.0);
        assert_eq!(oy, 0.0);
        // push = 1 - 4/10 = 0.6, offset = 4 * 0.6 * 0.5
        assert!((ox - 1.2).abs() < 1e-6);

        let (ox, oy) = r.offset(-2.0, -1.0);
        assert!(ox < 0.0);
        assert!(oy < 0.0);
    }

    #[test]
    fn test_zero_radius_disables() {
        let r = Repulsion::new(0.0, 1.0);
        assert_eq!(r.offset(1.0, 1.0), (0.0, 0.0));
    }
}
