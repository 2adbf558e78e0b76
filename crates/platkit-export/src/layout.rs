//! Flat-pattern layout: turns resolved patterns into drawable outlines.
//!
//! Sector-shaped patterns (cone, square-to-round quarter) are laid out
//! around their apex at the origin and centered on the +Y axis.

use platkit_math::{polar, Point2};
use platkit_pattern::{ConeResult, FlatPattern, ProfileResult, SegmentBendResult, SquareToRoundResult};

use crate::drawing::{Drawing, Layer};

/// Lay out any resolved pattern.
pub fn layout(pattern: &FlatPattern) -> Drawing {
    match pattern {
        FlatPattern::SquareToRound(r) => square_to_round_drawing(r),
        FlatPattern::Cone(r) => cone_drawing(r),
        FlatPattern::SegmentBend(r) => segment_bend_drawing(r),
        FlatPattern::Profile(r) => profile_drawing(r),
    }
}

/// Annular sector between `inner` and `outer` radius, centered on +Y.
fn add_sector(drawing: &mut Drawing, outer: f64, inner: f64, sweep: f64) {
    let apex = Point2::origin();
    let start = 90.0 - sweep / 2.0;
    let end = start + sweep;

    drawing.add_arc(apex, outer, start, sweep, Layer::Cut);
    if inner > 0.0 {
        drawing.add_arc(apex, inner, start, sweep, Layer::Cut);
    }
    drawing.add_line(polar(apex, inner, start), polar(apex, outer, start), Layer::Cut);
    drawing.add_line(polar(apex, inner, end), polar(apex, outer, end), Layer::Cut);
}

/// Developed frustum: annular sector with two seam lines.
pub fn cone_drawing(result: &ConeResult) -> Drawing {
    let mut drawing = Drawing::new("cone");
    add_sector(
        &mut drawing,
        result.outer_radius,
        result.inner_radius,
        result.arc_angle,
    );
    drawing
}

/// One quarter of a square-to-round transition as a closed outline: the
/// base edge at `inner_arc_radius` from the apex, two side lines up to the
/// ends of the outer arc, and the outer arc itself.
pub fn square_to_round_drawing(result: &SquareToRoundResult) -> Drawing {
    let mut drawing = Drawing::new("square-to-round quarter");
    let apex = Point2::origin();
    let start = 90.0 - result.arc_angle / 2.0;
    let end = start + result.arc_angle;

    let half = result.chord_length / 2.0;
    let base_left = Point2::new(-half, result.inner_arc_radius);
    let base_right = Point2::new(half, result.inner_arc_radius);

    drawing.add_line(base_left, base_right, Layer::Cut);
    drawing.add_line(base_right, polar(apex, result.outer_arc_radius, start), Layer::Cut);
    drawing.add_arc(apex, result.outer_arc_radius, start, result.arc_angle, Layer::Cut);
    drawing.add_line(polar(apex, result.outer_arc_radius, end), base_left, Layer::Cut);
    drawing
}

/// Unrolled middle segment: cut curve closed along the baseline, with the
/// bend centerline as a reference.
pub fn segment_bend_drawing(result: &SegmentBendResult) -> Drawing {
    let mut drawing = Drawing::new("segment bend");

    let mut outline: Vec<Point2> = result
        .coordinates
        .iter()
        .map(|p| Point2::new(p.x, p.y))
        .collect();
    outline.push(Point2::new(result.circumference, 0.0));
    outline.push(Point2::origin());
    drawing.add_polyline(outline, true, Layer::Cut);

    drawing.add_line(
        Point2::new(0.0, result.middle_height),
        Point2::new(result.circumference, result.middle_height),
        Layer::Bend,
    );
    drawing
}

/// Bent profile as an open polyline.
pub fn profile_drawing(result: &ProfileResult) -> Drawing {
    let mut drawing = Drawing::new("profile");
    drawing.add_polyline(result.points.clone(), false, Layer::Cut);
    drawing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Shape2D;
    use approx::assert_abs_diff_eq;
    use platkit_pattern::{cone, profile, segment_bend, square_to_round, SAMPLE_STEPS};

    #[test]
    fn test_cone_sector() {
        let result = cone::resolve(200.0, 100.0, 150.0).unwrap();
        let drawing = cone_drawing(&result);

        let arcs: Vec<_> = drawing
            .shapes()
            .iter()
            .filter(|s| matches!(s, Shape2D::Arc { .. }))
            .collect();
        assert_eq!(arcs.len(), 2);
        assert_eq!(drawing.shapes_on(Layer::Cut).count(), 4);

        // symmetric about the Y axis, apex at the origin
        let b = drawing.bounds().unwrap();
        assert_abs_diff_eq!(b.min.x, -b.max.x, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, result.outer_radius, epsilon = 1e-9);
    }

    #[test]
    fn test_cone_seam_length() {
        let result = cone::resolve(300.0, 120.0, 90.0).unwrap();
        let drawing = cone_drawing(&result);
        for shape in drawing.shapes() {
            if let Shape2D::Line { start, end, .. } = shape {
                assert_abs_diff_eq!((end - start).norm(), result.slant_height, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_square_to_round_outline_is_closed() {
        let result = square_to_round::resolve(200.0, 200.0, 100.0, 150.0).unwrap();
        let drawing = square_to_round_drawing(&result);
        assert_eq!(drawing.shapes_on(Layer::Cut).count(), 4);
        assert_eq!(drawing.shapes_on(Layer::Bend).count(), 0);

        // Walk the outline: every shape must start where the previous one ended.
        let ends: Vec<(Point2, Point2)> = drawing
            .shapes()
            .iter()
            .map(|shape| match shape {
                Shape2D::Line { start, end, .. } => (*start, *end),
                Shape2D::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                    ..
                } => (
                    polar(*center, *radius, *start_angle),
                    polar(*center, *radius, start_angle + sweep),
                ),
                other => panic!("unexpected shape {other:?}"),
            })
            .collect();
        for i in 0..ends.len() {
            let (_, end) = ends[i];
            let (next_start, _) = ends[(i + 1) % ends.len()];
            assert_abs_diff_eq!((next_start - end).norm(), 0.0, epsilon = 1e-9);
        }

        // The base edge is the chord, and both its ends are outline vertices.
        let (left, right) = ends[0];
        assert_abs_diff_eq!((right - left).norm(), result.chord_length, epsilon = 1e-9);
        assert_abs_diff_eq!(left.y, result.inner_arc_radius, epsilon = 1e-9);
        assert_abs_diff_eq!(right.y, result.inner_arc_radius, epsilon = 1e-9);

        // The outline fits in the chord's width on the sheet.
        let b = drawing.bounds().unwrap();
        assert_abs_diff_eq!(b.min.x, -result.chord_length / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.x, result.chord_length / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, result.outer_arc_radius, epsilon = 1e-9);
    }

    #[test]
    fn test_segment_bend_outline() {
        let result = segment_bend::resolve(100.0, 150.0, 90.0, 3).unwrap();
        let drawing = segment_bend_drawing(&result);
        match &drawing.shapes()[0] {
            Shape2D::Polyline { points, closed, .. } => {
                assert!(closed);
                assert_eq!(points.len(), SAMPLE_STEPS + 3);
                assert_eq!(points[0].y, result.max_height);
            }
            other => panic!("expected polyline, got {other:?}"),
        }
        let b = drawing.bounds().unwrap();
        assert_abs_diff_eq!(b.max.y, result.max_height, epsilon = 1e-9);
        assert_abs_diff_eq!(b.width(), result.circumference, epsilon = 1e-9);
    }

    #[test]
    fn test_layout_dispatch() {
        let pattern: FlatPattern = profile::resolve(&profile::default_legs()).unwrap().into();
        let drawing = layout(&pattern);
        assert_eq!(drawing.title, "profile");
        assert_eq!(drawing.shapes().len(), 1);
    }
}
