use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::{allclose_2d, Point2};

/// Resamples a closed boundary into points evenly spaced by arc length.
///
/// # Algorithm
///
/// 1. Close the loop by appending the first point unless the last point
///    already matches it (within [`allclose_2d`]).
/// 2. Accumulate segment lengths into a table of arc length per vertex.
/// 3. Place `count` targets evenly over `[0, perimeter]`, both ends included.
/// 4. Interpolate x and y linearly against arc length at each target.
///
/// The first and last samples both sit on the start vertex, so consecutive
/// samples are `perimeter / (count - 1)` apart along the boundary.
#[derive(Debug)]
pub struct ResamplePolyline {
    boundary: Vec<Point2>,
    count: usize,
}

impl ResamplePolyline {
    /// Creates a new resampling operation.
    #[must_use]
    pub fn new(boundary: Vec<Point2>, count: usize) -> Self {
        Self { boundary, count }
    }

    /// Returns the boundary with the closing point appended when needed.
    #[must_use]
    pub fn closed_boundary(&self) -> Vec<Point2> {
        let mut closed = self.boundary.clone();
        if let (Some(first), Some(last)) = (self.boundary.first(), self.boundary.last()) {
            if !allclose_2d(first, last) {
                closed.push(*first);
            }
        }
        closed
    }

    /// Cumulative arc length at each vertex of [`Self::closed_boundary`].
    ///
    /// Starts at 0 and ends at the perimeter.
    #[must_use]
    pub fn arc_lengths(&self) -> Vec<f64> {
        cumulative_lengths(&self.closed_boundary())
    }

    /// Executes the resampling, returning exactly `count` points.
    ///
    /// A zero-length boundary (all points coincide) yields `count` copies of
    /// that point.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if `count < 2`
    /// - `OperationError::InvalidInput` if the boundary is empty
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.count < 2 {
            return Err(OperationError::InvalidInput(format!(
                "sample count must be at least 2, got {}",
                self.count
            ))
            .into());
        }
        if self.boundary.is_empty() {
            return Err(
                OperationError::InvalidInput("cannot resample an empty boundary".to_owned()).into(),
            );
        }

        let closed = self.closed_boundary();
        let cumulative = cumulative_lengths(&closed);
        let total = cumulative.last().copied().unwrap_or(0.0);

        if total <= 0.0 {
            debug!(count = self.count, "zero-length boundary, repeating single point");
            return Ok(vec![closed[0]; self.count]);
        }

        #[allow(clippy::cast_precision_loss)]
        let step = total / (self.count - 1) as f64;
        let samples: Vec<Point2> = (0..self.count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let target = match i {
                    0 => 0.0,
                    i if i == self.count - 1 => total,
                    i => step * i as f64,
                };
                interpolate(&closed, &cumulative, target)
            })
            .collect();

        debug!(
            vertices = closed.len(),
            perimeter = total,
            count = samples.len(),
            "boundary resampled"
        );
        Ok(samples)
    }
}

fn cumulative_lengths(points: &[Point2]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut acc = 0.0;
    cumulative.push(acc);
    for pair in points.windows(2) {
        acc += (pair[1] - pair[0]).norm();
        cumulative.push(acc);
    }
    cumulative.truncate(points.len());
    cumulative
}

/// Linear interpolation of `points` at arc length `target`.
///
/// Targets past either end clamp to the end point. Zero-length segments are
/// skipped, so repeated knots resolve to the later segment.
fn interpolate(points: &[Point2], cumulative: &[f64], target: f64) -> Point2 {
    let last = points.len() - 1;
    if target <= cumulative[0] {
        return points[0];
    }
    if target >= cumulative[last] {
        return points[last];
    }
    // First knot strictly greater than the target; always in 1..=last here.
    let hi = cumulative.partition_point(|&d| d <= target).clamp(1, last);
    let lo = hi - 1;
    let span = cumulative[hi] - cumulative[lo];
    if span <= 0.0 {
        return points[hi];
    }
    let t = (target - cumulative[lo]) / span;
    points[lo] + (points[hi] - points[lo]) * t
}
