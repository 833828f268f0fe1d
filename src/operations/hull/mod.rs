mod convex_hull_2d;

pub use convex_hull_2d::ConvexHull2D;
