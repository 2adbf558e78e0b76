//! Bent flashing profiles.
//!
//! A profile is a chain of straight legs joined by bends, e.g. a window
//! flashing. The blank width is the sum of the leg lengths; the traced
//! polyline is used for the preview and for export.

use platkit_math::{polar, BoundingBox2, Point2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::input::require_positive;

/// One straight leg of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileLeg {
    /// Leg length (mm).
    pub length: f64,
    /// Bend from the previous leg's heading (degrees, counter-clockwise).
    /// Ignored for the first leg.
    pub angle: f64,
}

impl ProfileLeg {
    /// Create a leg.
    pub fn new(length: f64, angle: f64) -> Self {
        Self { length, angle }
    }
}

/// Window flashing used when no profile is given.
pub fn default_legs() -> Vec<ProfileLeg> {
    vec![
        ProfileLeg::new(15.0, 0.0),
        ProfileLeg::new(100.0, 100.0),
        ProfileLeg::new(30.0, 90.0),
        ProfileLeg::new(10.0, 135.0),
    ]
}

/// Blank width and traced outline of a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResult {
    /// Flat blank width: sum of all leg lengths (mm).
    pub blank_width: f64,
    /// Polyline vertices, starting at the origin; one more than the legs.
    pub points: Vec<Point2>,
    /// Extent of the traced profile.
    pub bounds: BoundingBox2,
    /// Length of the finished profile run (mm), if given.
    pub length: Option<f64>,
    /// Sheet area of the blank over `length`, in square metres.
    pub area_m2: Option<f64>,
}

/// Resolve the blank width and outline of a bent profile.
pub fn resolve(legs: &[ProfileLeg]) -> Result<ProfileResult> {
    resolve_with_length(legs, None)
}

/// Resolve a profile and, when `length` is given, the sheet area it takes.
///
/// The area is `blank_width * length` converted from mm² to m².
pub fn resolve_with_length(legs: &[ProfileLeg], length: Option<f64>) -> Result<ProfileResult> {
    if let Some(length) = length {
        require_positive("profile length", length)?;
    }
    if legs.is_empty() {
        return Err(PatternError::InvalidInput(
            "a profile needs at least one leg".into(),
        ));
    }
    for (i, leg) in legs.iter().enumerate() {
        if !leg.length.is_finite() || leg.length < 0.0 {
            return Err(PatternError::InvalidInput(format!(
                "leg {} length must be zero or positive, got {}",
                i + 1,
                leg.length
            )));
        }
        if !leg.angle.is_finite() {
            return Err(PatternError::InvalidInput(format!(
                "leg {} angle must be finite",
                i + 1
            )));
        }
    }

    let mut points = Vec::with_capacity(legs.len() + 1);
    let mut cursor = Point2::origin();
    let mut heading = 0.0;
    points.push(cursor);
    for (i, leg) in legs.iter().enumerate() {
        if i > 0 {
            heading += leg.angle;
        }
        cursor = polar(cursor, leg.length, heading);
        points.push(cursor);
    }

    let blank_width: f64 = legs.iter().map(|leg| leg.length).sum();
    let bounds = BoundingBox2::from_points(points.iter().copied())
        .unwrap_or_else(|| BoundingBox2::new(Point2::origin(), Point2::origin()));

    let area_m2 = length.map(|length| blank_width * length / 1_000_000.0);

    debug!(legs = legs.len(), blank_width, ?area_m2, "resolved profile");

    Ok(ProfileResult {
        blank_width,
        points,
        bounds,
        length,
        area_m2,
    })
}
