//! Point and rectangle math shared by hit testing and rendering.

use kurbo::{Point, Rect};

/// Rotate `point` around `center` by `angle` radians (y grows downward).
pub fn rotate_point(center: Point, point: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Axis-aligned bounding box of a point sequence.
///
/// Returns `Rect::ZERO` for an empty slice; callers uphold the invariant
/// that committed freehand paths are never empty.
pub fn bounding_box(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    let mut bounds = Rect::new(first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        bounds.x0 = bounds.x0.min(p.x);
        bounds.y0 = bounds.y0.min(p.y);
        bounds.x1 = bounds.x1.max(p.x);
        bounds.y1 = bounds.y1.max(p.y);
    }
    bounds
}

/// Min/max-normalized rectangle from two corner points.
///
/// Used for hit testing and selection chrome only; stored geometry keeps
/// its original, direction-preserving corners.
pub fn normalized_rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    Rect::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
}

/// Degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_quarter_turn() {
        let center = Point::new(0.0, 0.0);
        let p = rotate_point(center, Point::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!((p.x).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_round_trip() {
        let center = Point::new(40.0, -12.5);
        let original = Point::new(103.0, 55.0);
        let theta = 0.7321;
        let back = rotate_point(center, rotate_point(center, original, theta), -theta);
        assert!((back.x - original.x).abs() < 1e-9);
        assert!((back.y - original.y).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box() {
        let bounds = bounding_box(&[
            Point::new(10.0, 50.0),
            Point::new(-5.0, 20.0),
            Point::new(30.0, 25.0),
        ]);
        assert_eq!(bounds, Rect::new(-5.0, 20.0, 30.0, 50.0));
    }

    #[test]
    fn test_normalized_rect_inverted_corners() {
        let rect = normalized_rect(100.0, 80.0, 20.0, 120.0);
        assert_eq!(rect, Rect::new(20.0, 80.0, 100.0, 120.0));
    }

    #[test]
    fn test_degree_radian_round_trip() {
        assert!((to_degrees(to_radians(123.4)) - 123.4).abs() < 1e-9);
    }
}
