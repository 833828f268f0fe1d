pub mod hull;
pub mod projection;
pub mod sampling;
pub mod transform;

pub use hull::ConvexHull2D;
pub use projection::ProjectPoints;
pub use sampling::ResamplePolyline;
pub use transform::NormalizeForDisplay;
