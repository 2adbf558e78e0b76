//! Truncated cone (frustum) development.
//!
//! The developed frustum is an annular sector centered on the cone's
//! apex. Its outer radius is the slant distance from the apex to the
//! large circle; the sweep is chosen so the outer arc length equals the
//! large circumference.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::input::require_positive;

/// Diameters closer than this (mm) describe a cylinder, not a cone.
pub const CYLINDER_TOLERANCE: f64 = 0.1;

/// Annular-sector geometry for a frustum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeResult {
    /// Apex to large circle (mm).
    pub outer_radius: f64,
    /// Apex to small circle (mm).
    pub inner_radius: f64,
    /// Sweep of the sector (degrees, 0..360).
    pub arc_angle: f64,
    /// Length of a generatrix between the two circles (mm).
    pub slant_height: f64,
}

/// Resolve the flat pattern of a truncated cone.
///
/// Diameter order does not matter: the larger is always treated as the base.
pub fn resolve(large_diameter: f64, small_diameter: f64, height: f64) -> Result<ConeResult> {
    require_positive("large diameter", large_diameter)?;
    require_positive("small diameter", small_diameter)?;
    require_positive("height", height)?;

    if (large_diameter - small_diameter).abs() < CYLINDER_TOLERANCE {
        return Err(PatternError::DegenerateCone {
            large: large_diameter,
            small: small_diameter,
        });
    }

    let big = large_diameter.max(small_diameter);
    let small = large_diameter.min(small_diameter);

    let radius_diff = (big - small) / 2.0;
    let slant_height = (radius_diff * radius_diff + height * height).sqrt();

    // Similar triangles from the apex: R / big = (R - slant) / small
    let outer_radius = slant_height * big / (big - small);
    let inner_radius = outer_radius - slant_height;
    let arc_angle = 360.0 * (big / (2.0 * outer_radius));

    debug!(
        big,
        small, height, outer_radius, inner_radius, arc_angle, "resolved cone"
    );

    Ok(ConeResult {
        outer_radius,
        inner_radius,
        arc_angle,
        slant_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    #[test]
    fn test_reference_cone() {
        let result = resolve(200.0, 100.0, 150.0).unwrap();
        let slant = (50.0f64.powi(2) + 150.0f64.powi(2)).sqrt();
        assert_relative_eq!(result.slant_height, slant, epsilon = 1e-9);
        assert_relative_eq!(result.outer_radius, slant * 2.0, epsilon = 1e-9);
        assert_relative_eq!(result.inner_radius, slant, epsilon = 1e-9);
        assert_abs_diff_eq!(result.arc_angle, 113.84, epsilon = 0.1);
    }

    #[test]
    fn test_outer_arc_matches_circumference() {
        let result = resolve(300.0, 120.0, 90.0).unwrap();
        let arc_len = result.outer_radius * result.arc_angle.to_radians();
        assert_relative_eq!(arc_len, PI * 300.0, epsilon = 1e-9);

        let inner_len = result.inner_radius * result.arc_angle.to_radians();
        assert_relative_eq!(inner_len, PI * 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(
            resolve(200.0, 100.0, 150.0).unwrap(),
            resolve(100.0, 200.0, 150.0).unwrap()
        );
    }

    #[test]
    fn test_cylinder_rejected() {
        let err = resolve(100.05, 100.0, 150.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateCone);
        assert!(resolve(100.0, 100.0, 150.0).is_err());
        // just outside the tolerance is a (very long) cone
        assert!(resolve(100.2, 100.0, 150.0).is_ok());
    }

    #[test]
    fn test_non_positive_rejected() {
        for (a, b, h) in [(0.0, 100.0, 150.0), (200.0, -1.0, 150.0), (200.0, 100.0, 0.0)] {
            assert_eq!(resolve(a, b, h).unwrap_err().kind(), ErrorKind::InvalidInput);
        }
    }
}
