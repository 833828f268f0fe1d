pub mod projection_plane;

pub use projection_plane::ProjectionPlane;
