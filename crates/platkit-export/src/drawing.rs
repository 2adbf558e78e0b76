//! 2D drawing model shared by the DXF and SVG writers.

use platkit_math::{normalize_degrees, polar, BoundingBox2, Point2};

/// Drawing layer. Cut lines are the outline to shear; bend lines are
/// reference marks (bend or fold lines, base chords).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Outline to cut.
    Cut,
    /// Fold and reference lines.
    Bend,
}

impl Layer {
    /// All layers in drawing order.
    pub const ALL: [Layer; 2] = [Layer::Cut, Layer::Bend];

    /// Layer name as written to files.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Cut => "CUT",
            Layer::Bend => "BEND",
        }
    }
}

/// A 2D shape on a layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape2D {
    /// Line segment.
    Line {
        /// Start point.
        start: Point2,
        /// End point.
        end: Point2,
        /// Target layer.
        layer: Layer,
    },
    /// Circular arc, counter-clockwise from `start_angle`.
    Arc {
        /// Arc center.
        center: Point2,
        /// Arc radius.
        radius: f64,
        /// Start angle in degrees.
        start_angle: f64,
        /// Sweep in degrees, in `(0, 360]`.
        sweep: f64,
        /// Target layer.
        layer: Layer,
    },
    /// Open or closed polyline.
    Polyline {
        /// Ordered vertices.
        points: Vec<Point2>,
        /// Whether the last vertex joins the first.
        closed: bool,
        /// Target layer.
        layer: Layer,
    },
}

impl Shape2D {
    /// The layer this shape is drawn on.
    pub fn layer(&self) -> Layer {
        match self {
            Shape2D::Line { layer, .. } => *layer,
            Shape2D::Arc { layer, .. } => *layer,
            Shape2D::Polyline { layer, .. } => *layer,
        }
    }

    /// Axis-aligned extent of the shape.
    pub fn bounds(&self) -> BoundingBox2 {
        let mut bbox = BoundingBox2::empty();
        match self {
            Shape2D::Line { start, end, .. } => {
                bbox.include(start);
                bbox.include(end);
            }
            Shape2D::Arc {
                center,
                radius,
                start_angle,
                sweep,
                ..
            } => {
                bbox.include(&polar(*center, *radius, *start_angle));
                bbox.include(&polar(*center, *radius, start_angle + sweep));
                // Quadrant extremes inside the sweep
                let start = normalize_degrees(*start_angle);
                for quadrant in [0.0, 90.0, 180.0, 270.0] {
                    let offset = normalize_degrees(quadrant - start);
                    if offset <= *sweep {
                        bbox.include(&polar(*center, *radius, quadrant));
                    }
                }
            }
            Shape2D::Polyline { points, .. } => {
                for p in points {
                    bbox.include(p);
                }
            }
        }
        bbox
    }
}

/// End angle of an arc, normalized to `[0, 360)`.
pub fn arc_end_angle(start_angle: f64, sweep: f64) -> f64 {
    normalize_degrees(start_angle + sweep)
}

/// A collection of shapes ready for export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    /// Title written into file metadata.
    pub title: String,
    shapes: Vec<Shape2D>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            shapes: Vec::new(),
        }
    }

    /// Add a line segment.
    pub fn add_line(&mut self, start: Point2, end: Point2, layer: Layer) {
        self.shapes.push(Shape2D::Line { start, end, layer });
    }

    /// Add a counter-clockwise arc.
    pub fn add_arc(&mut self, center: Point2, radius: f64, start_angle: f64, sweep: f64, layer: Layer) {
        self.shapes.push(Shape2D::Arc {
            center,
            radius,
            start_angle,
            sweep,
            layer,
        });
    }

    /// Add a polyline.
    pub fn add_polyline(&mut self, points: Vec<Point2>, closed: bool, layer: Layer) {
        self.shapes.push(Shape2D::Polyline {
            points,
            closed,
            layer,
        });
    }

    /// All shapes in insertion order.
    pub fn shapes(&self) -> &[Shape2D] {
        &self.shapes
    }

    /// Shapes on one layer.
    pub fn shapes_on(&self, layer: Layer) -> impl Iterator<Item = &Shape2D> {
        self.shapes.iter().filter(move |s| s.layer() == layer)
    }

    /// True if no shape has been added.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Extent of every shape, or `None` for an empty drawing.
    pub fn bounds(&self) -> Option<BoundingBox2> {
        let mut bbox = BoundingBox2::empty();
        for shape in &self.shapes {
            bbox.merge(&shape.bounds());
        }
        if bbox.is_empty() {
            None
        } else {
            Some(bbox)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arc_bounds_include_quadrants() {
        // upper half circle: 0° -> 180°
        let arc = Shape2D::Arc {
            center: Point2::origin(),
            radius: 10.0,
            start_angle: 0.0,
            sweep: 180.0,
            layer: Layer::Cut,
        };
        let b = arc.bounds();
        assert_abs_diff_eq!(b.min.x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_bounds_wrapping_start() {
        // 300° -> 60°, crosses 0°
        let arc = Shape2D::Arc {
            center: Point2::origin(),
            radius: 10.0,
            start_angle: 300.0,
            sweep: 120.0,
            layer: Layer::Cut,
        };
        let b = arc.bounds();
        assert_abs_diff_eq!(b.max.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.x, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_drawing_bounds_and_layers() {
        let mut drawing = Drawing::new("test");
        assert!(drawing.bounds().is_none());

        drawing.add_line(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0), Layer::Cut);
        drawing.add_line(Point2::new(-2.0, 1.0), Point2::new(3.0, 1.0), Layer::Bend);
        let b = drawing.bounds().unwrap();
        assert_eq!(b.min, Point2::new(-2.0, 0.0));
        assert_eq!(b.max, Point2::new(10.0, 5.0));

        assert_eq!(drawing.shapes_on(Layer::Cut).count(), 1);
        assert_eq!(drawing.shapes_on(Layer::Bend).count(), 1);
        assert_eq!(drawing.shapes().len(), 2);
    }

    #[test]
    fn test_arc_end_angle() {
        assert_eq!(arc_end_angle(300.0, 120.0), 60.0);
        assert_eq!(arc_end_angle(45.0, 90.0), 135.0);
    }
}
