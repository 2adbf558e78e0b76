//! Segmented (lobster-back) bend development.
//!
//! A bend of `angle` degrees built from `segments` pieces has
//! `segments - 1` welded joints. Each joint is a miter, so the total angle
//! is split over `2 * joints` cuts: end pieces carry one cut, middle pieces
//! two.
//!
//! The unrolled middle piece is bounded by a cosine curve. With θ = 0 at
//! the back of the bend (longest generatrix) and θ = 180° at the throat:
//!
//! ```text
//! y(θ) = center_height + 2 · amplitude · cos θ
//! ```
//!
//! where `amplitude = (diameter / 2) · tan(cut_angle)`.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::input::require_positive;

/// Number of intervals the cut curve is sampled at over one revolution.
pub const SAMPLE_STEPS: usize = 24;

/// One sample of the unrolled cut curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, Deserialize)]
pub struct CurvePoint {
    /// Distance along the unrolled circumference (mm).
    pub x: f64,
    /// Segment height at this position (mm).
    pub y: f64,
    /// Position around the pipe (degrees, 0 = back).
    pub angle: f64,
}

/// Cut-line profile of an unrolled middle segment.
///
/// Samples are computed on demand; iterating twice yields identical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutCurve {
    circumference: f64,
    center_height: f64,
    amplitude: f64,
    steps: usize,
}

impl CutCurve {
    fn new(circumference: f64, center_height: f64, amplitude: f64) -> Self {
        Self {
            circumference,
            center_height,
            amplitude,
            steps: SAMPLE_STEPS,
        }
    }

    /// Number of samples (`steps + 1`, both ends of the revolution included).
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always false; a curve has at least two samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Segment height at `angle_deg` around the pipe.
    pub fn height_at(&self, angle_deg: f64) -> f64 {
        self.center_height + 2.0 * self.amplitude * angle_deg.to_radians().cos()
    }

    /// The `i`-th sample, or `None` past the end.
    pub fn sample(&self, i: usize) -> Option<CurvePoint> {
        if i > self.steps {
            return None;
        }
        let steps = self.steps as f64;
        let angle = (360.0 / steps) * i as f64;
        Some(CurvePoint {
            x: (self.circumference / steps) * i as f64,
            y: self.height_at(angle),
            angle,
        })
    }

    /// Iterate over all samples from θ = 0 to θ = 360°.
    pub fn iter(&self) -> CutCurveIter {
        CutCurveIter {
            curve: *self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<'a> IntoIterator for &'a CutCurve {
    type Item = CurvePoint;
    type IntoIter = CutCurveIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for CutCurve {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over the samples of a [`CutCurve`].
#[derive(Debug, Clone)]
pub struct CutCurveIter {
    curve: CutCurve,
    front: usize,
    back: usize,
}

impl Iterator for CutCurveIter {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        let point = self.curve.sample(self.front);
        self.front += 1;
        point
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for CutCurveIter {
    fn next_back(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.curve.sample(self.back)
    }
}

impl ExactSizeIterator for CutCurveIter {}

impl FusedIterator for CutCurveIter {}

/// Pattern geometry for one full middle segment of a segmented bend.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SegmentBendResult {
    /// Miter angle per cut (degrees).
    pub cut_angle: f64,
    /// Angle covered by one middle segment (`2 * cut_angle`, degrees).
    pub segment_angle: f64,
    /// Number of welded joints (`segments - 1`).
    pub joints: u32,
    /// Segment height along the bend centerline (mm).
    pub middle_height: f64,
    /// Segment height at the back, θ = 0 (mm).
    pub max_height: f64,
    /// Segment height at the throat, θ = 180° (mm).
    pub min_height: f64,
    /// Unrolled pipe circumference (mm).
    pub circumference: f64,
    /// Sampled cut curve of the unrolled segment.
    pub coordinates: CutCurve,
}

/// Resolve the pattern of a segmented bend.
///
/// # Errors
///
/// [`PatternError::InvalidInput`] if a dimension is not positive, fewer
/// than two segments are requested, or the cut angle would reach 90°.
pub fn resolve(diameter: f64, radius: f64, angle: f64, segments: u32) -> Result<SegmentBendResult> {
    require_positive("diameter", diameter)?;
    require_positive("radius", radius)?;
    require_positive("angle", angle)?;
    if segments < 2 {
        return Err(PatternError::InvalidInput(format!(
            "a segment bend needs at least 2 segments, got {segments}"
        )));
    }

    let joints = segments - 1;
    let cut_angle = angle / (2.0 * f64::from(joints));
    if cut_angle >= 90.0 {
        return Err(PatternError::InvalidInput(format!(
            "bend of {angle}° over {segments} segments gives a {cut_angle}° cut; use more segments"
        )));
    }
    let tan_cut = cut_angle.to_radians().tan();

    let circumference = diameter * PI;
    let amplitude = (diameter / 2.0) * tan_cut;
    let middle_height = 2.0 * radius * tan_cut;
    let max_height = middle_height + 2.0 * amplitude;
    let min_height = middle_height - 2.0 * amplitude;

    debug!(
        diameter,
        radius, angle, segments, cut_angle, max_height, min_height, "resolved segment bend"
    );

    Ok(SegmentBendResult {
        cut_angle,
        segment_angle: 2.0 * cut_angle,
        joints,
        middle_height,
        max_height,
        min_height,
        circumference,
        coordinates: CutCurve::new(circumference, middle_height, amplitude),
    })
}
