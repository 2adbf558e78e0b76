#![warn(missing_docs)]

//! Math types for platkit flat-pattern development.
//!
//! Thin wrappers around nalgebra providing the planar types used when
//! laying out developed sheet-metal patterns: points, axis transforms and
//! bounding boxes.
//!
//! Angles cross API boundaries in degrees. Radians only appear inside
//! trigonometric expressions.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// A point on the flat sheet.
pub type Point2 = nalgebra::Point2<f64>;

/// Point at `radius` from `center` in direction `angle_deg` (counter-clockwise from +X).
pub fn polar(center: Point2, radius: f64, angle_deg: f64) -> Point2 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Point2::new(center.x + radius * c, center.y + radius * s)
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// A 3x3 homogeneous transformation for the sheet plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2 {
    /// The underlying homogeneous matrix.
    pub matrix: Matrix3<f64>,
}

impl Transform2 {
    /// Non-uniform scale by `(sx, sy)`. `scale(1.0, -1.0)` mirrors through the X axis.
    pub fn scale(sx: f64, sy: f64) -> Self {
        let mut m = Matrix3::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        Self { matrix: m }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point2) -> Point2 {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point2::new(v.x, v.y)
    }
}

/// Axis-aligned bounding box on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl BoundingBox2 {
    /// Box spanning two corners.
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// An inverted box that any point will expand.
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Option<Self> {
        let mut bbox = Self::empty();
        for p in points {
            bbox.include(&p);
        }
        if bbox.is_empty() {
            None
        } else {
            Some(bbox)
        }
    }

    /// True if no point has been included yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Grow the box to contain `p`.
    pub fn include(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Grow the box to contain `other`.
    pub fn merge(&mut self, other: &BoundingBox2) {
        if other.is_empty() {
            return;
        }
        self.include(&other.min);
        self.include(&other.max);
    }

    /// Width along X.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along Y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Box grown by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polar() {
        let p = polar(Point2::origin(), 10.0, 90.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 10.0, epsilon = 1e-12);

        let q = polar(Point2::new(1.0, 1.0), 2.0, 180.0);
        assert_abs_diff_eq!(q.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
    }

    #[test]
    fn test_scale() {
        let s = Transform2::scale(2.0, -1.0);
        let q = s.apply_point(&Point2::new(3.0, 4.0));
        assert_abs_diff_eq!(q.x, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_box() {
        assert!(BoundingBox2::from_points(std::iter::empty()).is_none());

        let bbox = BoundingBox2::from_points([
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bbox.min, Point2::new(-2.0, -1.0));
        assert_eq!(bbox.max, Point2::new(4.0, 5.0));
        assert_eq!(bbox.width(), 6.0);
        assert_eq!(bbox.height(), 6.0);

        let padded = bbox.padded(1.0);
        assert_eq!(padded.width(), 8.0);

        let mut merged = BoundingBox2::empty();
        merged.merge(&BoundingBox2::empty());
        assert!(merged.is_empty());
        merged.merge(&bbox);
        assert_eq!(merged, bbox);
    }
}
