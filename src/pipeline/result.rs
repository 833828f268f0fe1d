use std::collections::BTreeMap;

use crate::geometry::ProjectionPlane;
use crate::math::Point2;
use crate::operations::NormalizeForDisplay;

/// Whether the pipeline had vertices to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// Profiles were computed from a non-empty vertex set.
    Complete,
    /// The vertex set was empty; every profile is empty.
    Empty,
}

/// Resampled silhouette profile per projection plane.
///
/// Iteration follows canonical plane order (`XY`, `XZ`, `YZ`) regardless of
/// how the profiles were computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    profiles: BTreeMap<ProjectionPlane, Vec<Point2>>,
    status: InputStatus,
}

impl ProjectionResult {
    pub(crate) fn new(profiles: BTreeMap<ProjectionPlane, Vec<Point2>>, status: InputStatus) -> Self {
        Self { profiles, status }
    }

    /// Returns the input status of the run.
    #[must_use]
    pub fn status(&self) -> InputStatus {
        self.status
    }

    /// Returns `true` if the run received no vertices.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        self.status == InputStatus::Empty
    }

    /// Returns the profile for `plane`, if it was requested.
    #[must_use]
    pub fn get(&self, plane: ProjectionPlane) -> Option<&[Point2]> {
        self.profiles.get(&plane).map(Vec::as_slice)
    }

    /// Iterates over `(plane, profile)` pairs in canonical plane order.
    pub fn iter(&self) -> impl Iterator<Item = (ProjectionPlane, &[Point2])> {
        self.profiles.iter().map(|(plane, pts)| (*plane, pts.as_slice()))
    }

    /// Returns the planes present in this result.
    pub fn planes(&self) -> impl Iterator<Item = ProjectionPlane> + '_ {
        self.profiles.keys().copied()
    }

    /// Returns the number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no plane was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns every profile rotated and shifted for plotting.
    ///
    /// See [`NormalizeForDisplay`].
    #[must_use]
    pub fn normalized_for_display(&self) -> BTreeMap<ProjectionPlane, Vec<Point2>> {
        self.profiles
            .iter()
            .map(|(plane, pts)| (*plane, NormalizeForDisplay::new(pts).execute()))
            .collect()
    }

    /// Consumes the result, returning the underlying map.
    #[must_use]
    pub fn into_profiles(self) -> BTreeMap<ProjectionPlane, Vec<Point2>> {
        self.profiles
    }
}
