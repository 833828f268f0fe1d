pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod source;

pub use error::{Result, SilhouetteError};
pub use geometry::ProjectionPlane;
pub use pipeline::{ExecutionStrategy, InputStatus, PipelineParams, ProjectionPipeline, ProjectionResult};
pub use source::{InMemorySource, VertexSource};
