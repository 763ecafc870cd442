//! Point and stroke definitions.

use super::color::PaletteColor;
use std::ops::{Add, Mul, Sub};
use std::sync::Arc;

/// A sample in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components,
    /// callers only normalize vectors between distinct points.
    pub fn unit(self) -> Point {
        self * (1.0 / self.length())
    }

    /// Perpendicular vector, rotated a quarter turn clockwise in screen space.
    pub fn perpendicular(self) -> Point {
        Point::new(self.y, -self.x)
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self + (other - self) * t
    }

    /// Rotates this point around `center` by `radians`.
    pub fn rotate_around(self, center: Point, radians: f64) -> Point {
        let (s, c) = radians.sin_cos();
        let p = self - center;
        Point::new(p.x * c - p.y * s + center.x, p.x * s + p.y * c + center.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Sum of the distances between consecutive points.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// One continuous pen-down to pen-up polyline.
///
/// Color and width are fixed when the stroke is committed. Points live behind
/// an [`Arc`] so store snapshots share them instead of copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Arc<[Point]>,
    /// Pen color recorded at commit time
    pub color: PaletteColor,
    /// Pen width recorded at commit time
    pub width: f64,
}

impl Stroke {
    /// Builds a stroke, or `None` when fewer than two points were captured.
    pub fn new(points: Vec<Point>, color: PaletteColor, width: f64) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self {
            points: points.into(),
            color,
            width,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns a stroke with the same style over a different polyline.
    pub fn with_points(&self, points: Vec<Point>) -> Option<Self> {
        Self::new(points, self.color, self.width)
    }

    /// Length of the raw centerline.
    pub fn centerline_length(&self) -> f64 {
        polyline_length(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_requires_two_points() {
        assert!(Stroke::new(vec![], PaletteColor::Black, 4.0).is_none());
        assert!(Stroke::new(vec![Point::new(1.0, 1.0)], PaletteColor::Black, 4.0).is_none());
        let stroke = Stroke::new(
            vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)],
            PaletteColor::Red,
            2.5,
        )
        .expect("two points form a stroke");
        assert_eq!(stroke.points().len(), 2);
        assert_eq!(stroke.centerline_length(), 5.0);
    }

    #[test]
    fn with_points_keeps_style() {
        let stroke = Stroke::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            PaletteColor::Green,
            7.25,
        )
        .unwrap();
        let other = stroke
            .with_points(vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)])
            .unwrap();
        assert_eq!(other.color, PaletteColor::Green);
        assert_eq!(other.width, 7.25);
        assert!(stroke.with_points(vec![Point::new(0.0, 0.0)]).is_none());
    }

    #[test]
    fn rotation_quarter_turn() {
        let p = Point::new(1.0, 0.0).rotate_around(Point::new(0.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(polyline_length(&pts), 20.0);
        assert_eq!(polyline_length(&pts[..1]), 0.0);
    }
}
