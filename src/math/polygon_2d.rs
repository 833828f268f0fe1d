use std::cmp::Ordering;

use super::distance_2d::point_to_segment_dist;
use super::Point2;

/// Z component of `(a - o) × (b - o)`.
///
/// Positive when `o → a → b` turns counter-clockwise, negative when it turns
/// clockwise, zero when the three points are collinear.
#[must_use]
pub fn cross(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Orders points by x, then y. NaN coordinates sort after every number.
#[must_use]
pub fn lexicographic_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Length of the closed loop through `points`, including the closing segment.
#[must_use]
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Tests whether `point` lies inside or on the boundary of a convex polygon.
///
/// Works for either winding. Points within `tol` of an edge count as inside.
#[must_use]
pub fn point_in_convex_polygon(point: &Point2, polygon: &[Point2], tol: f64) -> bool {
    let n = polygon.len();
    match n {
        0 => false,
        1 => (point - polygon[0]).norm() <= tol,
        2 => point_to_segment_dist(point, &polygon[0], &polygon[1]) <= tol,
        _ => {
            let winding = signed_area_2d(polygon).signum();
            (0..n).all(|i| {
                let a = &polygon[i];
                let b = &polygon[(i + 1) % n];
                cross(a, b, point) * winding >= 0.0 || point_to_segment_dist(point, a, b) <= tol
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn cross_turn_direction() {
        let o = Point2::new(0.0, 0.0);
        let a = Point2::new(1.0, 0.0);
        assert!(cross(&o, &a, &Point2::new(1.0, 1.0)) > 0.0);
        assert!(cross(&o, &a, &Point2::new(1.0, -1.0)) < 0.0);
        assert!(cross(&o, &a, &Point2::new(2.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn lexicographic_breaks_ties_on_y() {
        let a = Point2::new(1.0, 0.0);
        let b = Point2::new(1.0, 2.0);
        assert_eq!(lexicographic_cmp(&a, &b), Ordering::Less);
        assert_eq!(lexicographic_cmp(&b, &a), Ordering::Greater);
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_square_includes_closing_edge() {
        assert!((perimeter(&unit_square()) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_of_segment_is_round_trip() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)];
        assert!((perimeter(&pts) - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn point_inside_square() {
        let sq = unit_square();
        assert!(point_in_convex_polygon(&Point2::new(0.5, 0.5), &sq, TOLERANCE));
        assert!(point_in_convex_polygon(&Point2::new(1.0, 0.5), &sq, TOLERANCE));
        assert!(!point_in_convex_polygon(&Point2::new(1.5, 0.5), &sq, TOLERANCE));
    }

    #[test]
    fn point_inside_clockwise_square() {
        let mut sq = unit_square();
        sq.reverse();
        assert!(point_in_convex_polygon(&Point2::new(0.25, 0.75), &sq, TOLERANCE));
        assert!(!point_in_convex_polygon(&Point2::new(-0.1, 0.5), &sq, TOLERANCE));
    }

    #[test]
    fn point_on_degenerate_polygons() {
        let seg = [Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)];
        assert!(point_in_convex_polygon(&Point2::new(1.0, 0.0), &seg, TOLERANCE));
        assert!(!point_in_convex_polygon(&Point2::new(1.0, 0.1), &seg, TOLERANCE));
        assert!(!point_in_convex_polygon(&Point2::new(0.0, 0.0), &[], TOLERANCE));
    }
}
