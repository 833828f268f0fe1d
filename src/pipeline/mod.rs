mod params;
mod result;

pub use params::{ExecutionStrategy, PipelineParams, DEFAULT_SAMPLE_COUNT};
pub use result::{InputStatus, ProjectionResult};

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::geometry::ProjectionPlane;
use crate::math::polygon_2d::perimeter;
use crate::math::{Point2, Point3};
use crate::operations::{ConvexHull2D, ProjectPoints, ResamplePolyline};
use crate::source::VertexSource;

/// Silhouette extraction pipeline.
///
/// For each requested plane: project the vertices, take the convex hull of
/// the projection, and resample the hull boundary at equal arc-length steps.
/// Planes are independent and may run in parallel; results are always keyed
/// by plane.
#[derive(Debug, Clone, Default)]
pub struct ProjectionPipeline {
    params: PipelineParams,
}

impl ProjectionPipeline {
    /// Creates a new pipeline.
    #[must_use]
    pub fn new(params: PipelineParams) -> Self {
        Self { params }
    }

    /// Runs the pipeline over an in-memory vertex set.
    ///
    /// Empty input is not an error: the result carries
    /// [`InputStatus::Empty`] and an empty profile for every plane.
    ///
    /// # Errors
    ///
    /// Returns an error only if a stage rejects its input, which valid
    /// [`PipelineParams`] rule out.
    pub fn run(&self, vertices: &[Point3]) -> Result<ProjectionResult> {
        let _span = info_span!("projection_pipeline", vertices = vertices.len()).entered();

        if vertices.is_empty() {
            warn!("empty vertex set, skipping geometry");
            let profiles = self
                .params
                .planes()
                .iter()
                .map(|&plane| (plane, Vec::new()))
                .collect();
            return Ok(ProjectionResult::new(profiles, InputStatus::Empty));
        }

        let profiles: BTreeMap<ProjectionPlane, Vec<Point2>> = match self.params.strategy() {
            ExecutionStrategy::Sequential => self
                .params
                .planes()
                .iter()
                .map(|&plane| self.profile(vertices, plane).map(|p| (plane, p)))
                .collect::<Result<_>>()?,
            ExecutionStrategy::Parallel => self
                .params
                .planes()
                .par_iter()
                .map(|&plane| self.profile(vertices, plane).map(|p| (plane, p)))
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .collect(),
        };

        info!(
            planes = profiles.len(),
            samples = self.params.sample_count(),
            "silhouette profiles extracted"
        );
        Ok(ProjectionResult::new(profiles, InputStatus::Complete))
    }

    /// Fetches the vertices of `part` from `source` and runs the pipeline.
    ///
    /// # Errors
    ///
    /// Propagates the source's error untouched, before any geometry runs.
    pub fn run_source<S: VertexSource + ?Sized>(
        &self,
        source: &S,
        part: &str,
    ) -> Result<ProjectionResult> {
        let vertices = source.vertices(part)?;
        debug!(part, vertices = vertices.len(), "vertices acquired");
        self.run(&vertices)
    }

    /// Computes the resampled silhouette of `vertices` on a single plane.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertices` is empty.
    pub fn profile(&self, vertices: &[Point3], plane: ProjectionPlane) -> Result<Vec<Point2>> {
        let projected = ProjectPoints::new(vertices, plane).execute();
        let hull = ConvexHull2D::new(projected).execute();
        debug!(%plane, hull = hull.len(), perimeter = perimeter(&hull), "hull built");
        ResamplePolyline::new(hull, self.params.sample_count()).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{SilhouetteError, SourceError};
    use crate::math::allclose_2d;
    use crate::source::InMemorySource;
    use approx::assert_relative_eq;

    fn unit_cube() -> Vec<Point3> {
        let mut pts = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    pts.push(Point3::new(x, y, z));
                }
            }
        }
        pts
    }

    fn box_part() -> Vec<Point3> {
        unit_cube()
            .into_iter()
            .map(|p| Point3::new(p.x * 4.0, p.y * 2.0, p.z))
            .collect()
    }

    #[test]
    fn cube_xy_profile() {
        let pipeline = ProjectionPipeline::new(PipelineParams::new(8).unwrap());
        let profile = pipeline.profile(&unit_cube(), ProjectionPlane::XY).unwrap();
        assert_eq!(profile.len(), 8);
        assert!(allclose_2d(&profile[0], &profile[7]));
        let step = 4.0 / 7.0;
        for w in profile.windows(2) {
            // Chords never exceed the arc step; corners shorten them.
            assert!((w[1] - w[0]).norm() <= step + 1e-12);
        }
        assert_relative_eq!((profile[1] - profile[0]).norm(), step, epsilon = 1e-12);
    }

    #[test]
    fn all_planes_present_in_order() {
        let result = ProjectionPipeline::default().run(&box_part()).unwrap();
        assert_eq!(result.status(), InputStatus::Complete);
        let planes: Vec<_> = result.planes().collect();
        assert_eq!(planes, ProjectionPlane::ALL.to_vec());
        for (_, profile) in result.iter() {
            assert_eq!(profile.len(), DEFAULT_SAMPLE_COUNT);
        }
    }

    #[test]
    fn planes_see_different_extents() {
        let result = ProjectionPipeline::new(PipelineParams::new(50).unwrap())
            .run(&box_part())
            .unwrap();
        let max_x = |plane| {
            result
                .get(plane)
                .unwrap()
                .iter()
                .map(|p| p.x)
                .fold(f64::NEG_INFINITY, f64::max)
        };
        assert_relative_eq!(max_x(ProjectionPlane::XY), 4.0);
        assert_relative_eq!(max_x(ProjectionPlane::XZ), 4.0);
        assert_relative_eq!(max_x(ProjectionPlane::YZ), 2.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let params = PipelineParams::new(64).unwrap();
        let sequential = ProjectionPipeline::new(params.clone()).run(&box_part()).unwrap();
        let parallel = ProjectionPipeline::new(params.with_strategy(ExecutionStrategy::Parallel))
            .run(&box_part())
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_input_is_flagged() {
        let result = ProjectionPipeline::default().run(&[]).unwrap();
        assert!(result.is_empty_input());
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|(_, p)| p.is_empty()));
    }

    #[test]
    fn selected_planes_only() {
        let params = PipelineParams::new(10)
            .unwrap()
            .with_planes(&[ProjectionPlane::XZ])
            .unwrap();
        let result = ProjectionPipeline::new(params).run(&unit_cube()).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.get(ProjectionPlane::XY).is_none());
    }

    #[test]
    fn degenerate_part_still_samples() {
        // A flat plate in XY projects to a segment on XZ and YZ.
        let plate = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let result = ProjectionPipeline::new(PipelineParams::new(5).unwrap())
            .run(&plate)
            .unwrap();
        let xz = result.get(ProjectionPlane::XZ).unwrap();
        assert_eq!(xz.len(), 5);
        assert_relative_eq!(xz[2].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn run_source_propagates_missing_part() {
        let source = InMemorySource::new().with_part("cube", unit_cube());
        let pipeline = ProjectionPipeline::default();
        assert!(pipeline.run_source(&source, "cube").is_ok());
        let err = pipeline.run_source(&source, "sphere").unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Source(SourceError::PartNotFound(_))
        ));
    }
}
