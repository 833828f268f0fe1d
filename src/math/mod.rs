pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative tolerance used by [`allclose_2d`].
pub const CLOSE_RTOL: f64 = 1e-5;

/// Absolute tolerance used by [`allclose_2d`].
pub const CLOSE_ATOL: f64 = 1e-8;

/// Returns `true` if every coordinate of `a` is within
/// `CLOSE_ATOL + CLOSE_RTOL * |b|` of the matching coordinate of `b`.
#[must_use]
pub fn allclose_2d(a: &Point2, b: &Point2) -> bool {
    let close = |u: f64, v: f64| (u - v).abs() <= CLOSE_ATOL + CLOSE_RTOL * v.abs();
    close(a.x, b.x) && close(a.y, b.y)
}
