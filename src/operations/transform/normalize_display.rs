use nalgebra::Matrix2;

use crate::math::Point2;

/// Prepares a sampled profile for plotting.
///
/// Rotates every point 90° counter-clockwise about the origin, then shifts
/// horizontally so the smallest x is exactly 0. The rotation uses the exact
/// integer matrix `[[0, -1], [1, 0]]`, so no trigonometric rounding is
/// introduced.
#[derive(Debug)]
pub struct NormalizeForDisplay<'a> {
    points: &'a [Point2],
}

impl<'a> NormalizeForDisplay<'a> {
    /// Creates a new display normalization.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the normalization. Empty input yields empty output.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let quarter_turn = Matrix2::new(0.0, -1.0, 1.0, 0.0);
        let rotated: Vec<Point2> = self
            .points
            .iter()
            .map(|p| Point2::from(quarter_turn * p.coords))
            .collect();

        let min_x = rotated.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        if !min_x.is_finite() {
            return rotated;
        }
        rotated
            .into_iter()
            .map(|p| Point2::new(p.x - min_x, p.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_counter_clockwise() {
        let pts = [Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
        let out = NormalizeForDisplay::new(&pts).execute();
        // (1,0) → (0,1), (0,1) → (-1,0), then shift by +1.
        assert_eq!(out, vec![Point2::new(1.0, 1.0), Point2::new(0.0, 0.0)]);
    }

    #[test]
    fn min_x_is_zero() {
        let pts = [
            Point2::new(2.0, 5.0),
            Point2::new(-3.0, 7.5),
            Point2::new(0.0, -1.0),
        ];
        let out = NormalizeForDisplay::new(&pts).execute();
        let min_x = out.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        assert!(min_x.abs() < f64::EPSILON);
        // y after rotation is the original x.
        assert!((out[1].y + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input() {
        assert!(NormalizeForDisplay::new(&[]).execute().is_empty());
    }
}
