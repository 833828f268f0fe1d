use crate::geometry::ProjectionPlane;
use crate::math::{Point2, Point3};

/// Projects a 3D point set onto an axis-aligned plane.
///
/// Output has the same length and order as the input. Duplicate and
/// non-finite points are carried through untouched.
#[derive(Debug)]
pub struct ProjectPoints<'a> {
    points: &'a [Point3],
    plane: ProjectionPlane,
}

impl<'a> ProjectPoints<'a> {
    /// Creates a new projection operation.
    #[must_use]
    pub fn new(points: &'a [Point3], plane: ProjectionPlane) -> Self {
        Self { points, plane }
    }

    /// Executes the projection.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        self.points.iter().map(|p| self.plane.project(p)).collect()
    }
}
