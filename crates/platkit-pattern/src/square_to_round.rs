//! Square-to-round transition development.
//!
//! A square-to-round piece is developed as four identical quarters. Each
//! quarter is laid out by triangulation: true lengths are taken from the
//! base edges to points on the top circle, then unfolded around a common
//! apex on the flat sheet.
//!
//! Only square bases are handled. A rectangular base needs a full
//! triangulation with distinct true lengths per side and is rejected
//! with [`PatternError::UnsupportedGeometry`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::input::require_positive;

/// Quarter-pattern geometry for a square-to-round transition.
///
/// All lengths in mm, `arc_angle` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareToRoundResult {
    /// Radial height of the developed quarter (`outer_arc_radius - inner_arc_radius`).
    pub pattern_height: f64,
    /// True length from a base corner to the top circle; radius of the outer arc.
    pub outer_arc_radius: f64,
    /// Height of the unfolded corner triangle; radius of the inner arc.
    pub inner_arc_radius: f64,
    /// Base edge of one quarter.
    pub chord_length: f64,
    /// Sweep of the quarter around its apex, in `(0, 180)`.
    pub arc_angle: f64,
}

/// Resolve the quarter pattern of a square-to-round transition.
///
/// # Errors
///
/// - [`PatternError::InvalidInput`] if any dimension is not a positive number
/// - [`PatternError::UnsupportedGeometry`] if `base_width != base_depth`
/// - [`PatternError::InvalidGeometry`] if the top circle does not fit inside
///   the base, or no arc angle can be derived
pub fn resolve(
    base_width: f64,
    base_depth: f64,
    top_diameter: f64,
    height: f64,
) -> Result<SquareToRoundResult> {
    require_positive("base width", base_width)?;
    require_positive("base depth", base_depth)?;
    require_positive("top diameter", top_diameter)?;
    require_positive("height", height)?;

    if base_width != base_depth {
        return Err(PatternError::UnsupportedGeometry(format!(
            "only square bases are supported (width {base_width} != depth {base_depth})"
        )));
    }
    if top_diameter >= base_width {
        return Err(PatternError::InvalidGeometry(format!(
            "top diameter {top_diameter} must be smaller than the base {base_width}"
        )));
    }

    let w = base_width / 2.0;
    let r = top_diameter / 2.0;
    let h = height;

    // Base-side midpoint to the nearest point of the top circle.
    let l1 = (h * h + (w - r) * (w - r)).sqrt();
    // Base corner to the top-circle point 45° away.
    let l2 = (h * h + w * w + r * r).sqrt();

    let outer_arc_radius = l2;
    let inner_arc_radius = (l2 * l2 - w * w).sqrt();
    let chord_length = 2.0 * w;
    let pattern_height = outer_arc_radius - inner_arc_radius;

    let top_arc_length = PI * top_diameter / 4.0;
    let mut arc_angle = chord_sweep_angle(outer_arc_radius, top_arc_length);
    if arc_angle.is_nan() {
        debug!(
            outer_arc_radius,
            top_arc_length, "chord angle undefined, deriving arc angle from cone apex"
        );
        arc_angle = apex_sweep_angle(w, r, l1);
    }
    if !(arc_angle > 0.0 && arc_angle < 180.0) {
        return Err(PatternError::InvalidGeometry(format!(
            "could not derive an arc angle in (0, 180) from these dimensions, got {arc_angle}"
        )));
    }

    debug!(
        base_width,
        top_diameter,
        height,
        outer_arc_radius,
        inner_arc_radius,
        arc_angle,
        "resolved square-to-round"
    );

    Ok(SquareToRoundResult {
        pattern_height,
        outer_arc_radius,
        inner_arc_radius,
        chord_length,
        arc_angle,
    })
}

/// Apex angle (degrees) of an isosceles triangle with legs `radius` and base `chord`.
///
/// Same angle as the law of cosines `acos(1 - c² / 2r²)`, written as
/// `2·asin(c / 2r)` so a chord much shorter than the radius still gives a
/// non-zero angle. NaN when the chord cannot close the triangle.
pub fn chord_sweep_angle(radius: f64, chord: f64) -> f64 {
    (2.0 * (chord / (2.0 * radius)).asin()).to_degrees()
}

/// Sweep angle (degrees) from the apex of the equivalent cone.
///
/// `half_base` and `top_radius` are the half base width and top radius,
/// `side_length` the true length from base-side midpoint to the top circle.
/// The apex sits `top_radius * side_length / (half_base - top_radius)` beyond
/// the top circle by similar triangles.
pub fn apex_sweep_angle(half_base: f64, top_radius: f64, side_length: f64) -> f64 {
    let apex_height = top_radius * side_length / (half_base - top_radius);
    let apex_total = apex_height + side_length;
    (2.0 * (half_base / apex_total).asin()).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_piece() {
        let result = resolve(200.0, 200.0, 100.0, 150.0).unwrap();

        let l2 = (150.0f64.powi(2) + 100.0f64.powi(2) + 50.0f64.powi(2)).sqrt();
        assert_relative_eq!(result.outer_arc_radius, l2, epsilon = 1e-9);
        assert_relative_eq!(
            result.inner_arc_radius,
            (l2 * l2 - 100.0 * 100.0).sqrt(),
            epsilon = 1e-9
        );
        assert_eq!(result.chord_length, 200.0);
        assert!(result.arc_angle > 0.0 && result.arc_angle < 180.0);
        assert_relative_eq!(
            result.pattern_height,
            result.outer_arc_radius - result.inner_arc_radius,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_arc_angle_matches_law_of_cosines() {
        let result = resolve(200.0, 200.0, 100.0, 150.0).unwrap();
        let chord = PI * 100.0 / 4.0;
        let r = result.outer_arc_radius;
        let expected = ((2.0 * r * r - chord * chord) / (2.0 * r * r)).acos().to_degrees();
        assert_relative_eq!(result.arc_angle, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_rectangular_base_unsupported() {
        let err = resolve(200.0, 150.0, 100.0, 150.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedGeometry);
    }

    #[test]
    fn test_non_positive_rejected() {
        assert_eq!(
            resolve(0.0, 0.0, 100.0, 150.0).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            resolve(200.0, 200.0, 100.0, -1.0).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            resolve(200.0, 200.0, f64::NAN, 150.0).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_top_must_fit_inside_base() {
        let err = resolve(200.0, 200.0, 200.0, 150.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
    }

    #[test]
    fn test_tiny_height_and_top() {
        let result = resolve(200.0, 200.0, 0.5, 0.001).unwrap();
        assert!(result.arc_angle.is_finite());
        assert!(result.arc_angle > 0.0);
        assert!(result.outer_arc_radius > result.inner_arc_radius);
        assert!(result.inner_arc_radius >= 0.0);
    }

    #[test]
    fn test_vanishing_top_keeps_positive_angle() {
        for (top, height) in [(1e-6, 150.0), (1e-9, 150.0), (100.0, 1e12)] {
            let result = resolve(200.0, 200.0, top, height).unwrap();
            assert!(
                result.arc_angle > 0.0 && result.arc_angle < 180.0,
                "top={top} height={height} angle={}",
                result.arc_angle
            );
        }
    }

    #[test]
    fn test_chord_sweep_angle() {
        // equilateral triangle
        assert_relative_eq!(chord_sweep_angle(10.0, 10.0), 60.0, epsilon = 1e-9);
        // a chord longer than the diameter cannot close
        assert!(chord_sweep_angle(10.0, 25.0).is_nan());
    }

    #[test]
    fn test_apex_sweep_angle() {
        // w=100, r=50, l1=100: apex 100 beyond the top, total 200
        let angle = apex_sweep_angle(100.0, 50.0, 100.0);
        assert_relative_eq!(angle, 2.0 * (0.5f64).asin().to_degrees(), epsilon = 1e-9);
        assert_relative_eq!(angle, 60.0, epsilon = 1e-9);
    }
}
