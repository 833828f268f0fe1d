use tracing::{debug, warn};

use crate::math::distance_2d::point_to_line_dist;
use crate::math::polygon_2d::{cross, lexicographic_cmp};
use crate::math::{Point2, TOLERANCE};

/// Computes the convex hull boundary of a 2D point set.
///
/// # Algorithm
///
/// Andrew's monotone chain over the lexicographically sorted input. Only
/// strict left turns survive, so coincident points and points on a hull edge
/// never appear on the boundary. Input that is collinear within `TOLERANCE`
/// never reaches the chain.
///
/// # Output
///
/// - Non-degenerate input: each hull vertex exactly once, counter-clockwise,
///   starting at the lexicographically smallest vertex.
/// - Fewer than 3 points, or all points (nearly) collinear: the whole input
///   sorted by `(x, y)`, duplicates included.
#[derive(Debug)]
pub struct ConvexHull2D {
    points: Vec<Point2>,
}

impl ConvexHull2D {
    /// Creates a new convex hull operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Executes the hull computation. Total over any input, including empty.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let mut sorted = self.points.clone();
        sorted.sort_by(lexicographic_cmp);

        if sorted.len() < 3 || is_collinear(&sorted) {
            warn!(points = sorted.len(), "degenerate hull input, returning sorted points");
            return sorted;
        }

        let hull = monotone_chain(&sorted);
        if hull.len() < 3 {
            warn!(
                points = sorted.len(),
                hull = hull.len(),
                "hull collapsed below 3 vertices, returning sorted points"
            );
            return sorted;
        }

        debug!(points = sorted.len(), hull = hull.len(), "convex hull computed");
        hull
    }
}

/// Returns `true` if every point lies within tolerance of the line through the
/// first and last point of a lexicographically sorted slice.
fn is_collinear(sorted: &[Point2]) -> bool {
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return true;
    };
    let extent = (last - first).norm();
    if extent.is_nan() || extent <= TOLERANCE {
        return true;
    }
    let tol = TOLERANCE * extent.max(1.0);
    sorted
        .iter()
        .all(|p| point_to_line_dist(p, first, last) <= tol)
}

/// Andrew's monotone chain over pre-sorted points.
fn monotone_chain(sorted: &[Point2]) -> Vec<Point2> {
    let mut lower: Vec<Point2> = Vec::with_capacity(sorted.len());
    for p in sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point2> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
