use crate::error::{OperationError, Result};
use crate::geometry::ProjectionPlane;

/// Default number of samples per profile.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// How the per-plane profiles are scheduled.
///
/// Each plane is independent, so both strategies produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Planes are processed one after another on the calling thread.
    #[default]
    Sequential,
    /// Planes are processed concurrently on the rayon thread pool.
    Parallel,
}

/// Parameters controlling a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineParams {
    sample_count: usize,
    planes: Vec<ProjectionPlane>,
    strategy: ExecutionStrategy,
}

impl PipelineParams {
    /// Creates parameters for all three planes with the given sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_count < 2`.
    pub fn new(sample_count: usize) -> Result<Self> {
        if sample_count < 2 {
            return Err(OperationError::InvalidInput(format!(
                "sample count must be at least 2, got {sample_count}"
            ))
            .into());
        }
        Ok(Self {
            sample_count,
            ..Self::default()
        })
    }

    /// Restricts the run to the given planes. Duplicates are ignored and
    /// planes are kept in canonical order.
    ///
    /// # Errors
    ///
    /// Returns an error if `planes` is empty.
    pub fn with_planes(mut self, planes: &[ProjectionPlane]) -> Result<Self> {
        if planes.is_empty() {
            return Err(
                OperationError::InvalidInput("at least one projection plane is required".to_owned())
                    .into(),
            );
        }
        let mut planes = planes.to_vec();
        planes.sort();
        planes.dedup();
        self.planes = planes;
        Ok(self)
    }

    /// Sets the execution strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the number of samples per profile.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns the planes to process, in canonical order.
    #[must_use]
    pub fn planes(&self) -> &[ProjectionPlane] {
        &self.planes
    }

    /// Returns the execution strategy.
    #[must_use]
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            planes: ProjectionPlane::ALL.to_vec(),
            strategy: ExecutionStrategy::Sequential,
        }
    }
}
