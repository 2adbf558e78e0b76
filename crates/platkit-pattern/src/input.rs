//! Typed input records and text parsing.
//!
//! Raw text from a form or command line is parsed here into typed
//! records before any resolver runs. Parse failures surface as
//! [`PatternError::InvalidInput`] naming the offending field.

use serde::{Deserialize, Serialize};

use crate::cone::{self, ConeResult};
use crate::error::{PatternError, Result};
use crate::segment_bend::{self, SegmentBendResult};
use crate::square_to_round::{self, SquareToRoundResult};

/// Parse a decimal number. Accepts a decimal comma (`"12,5"`).
pub fn parse_number(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PatternError::InvalidInput(format!("{field} is empty")));
    }
    let value: f64 = trimmed.replace(',', ".").parse().map_err(|_| {
        PatternError::InvalidInput(format!("{field} is not a number: {trimmed:?}"))
    })?;
    if !value.is_finite() {
        return Err(PatternError::InvalidInput(format!(
            "{field} must be finite"
        )));
    }
    Ok(value)
}

/// Parse a strictly positive length in millimetres.
pub fn parse_length(field: &str, text: &str) -> Result<f64> {
    let value = parse_number(field, text)?;
    require_positive(field, value)
}

/// Parse a whole-number count.
pub fn parse_count(field: &str, text: &str) -> Result<u32> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| {
        PatternError::InvalidInput(format!(
            "{field} must be a whole number: {trimmed:?}"
        ))
    })
}

/// Reject non-finite and non-positive values.
pub(crate) fn require_positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        tracing::debug!(field, value, "rejecting non-positive dimension");
        return Err(PatternError::InvalidInput(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(value)
}

/// Dimensions of a square-to-round transition (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareToRoundInput {
    /// Width of the square base.
    pub base_width: f64,
    /// Depth of the square base; must equal `base_width`.
    pub base_depth: f64,
    /// Diameter of the round top.
    pub top_diameter: f64,
    /// Vertical height between base and top.
    pub height: f64,
}

impl Default for SquareToRoundInput {
    fn default() -> Self {
        Self {
            base_width: 200.0,
            base_depth: 200.0,
            top_diameter: 100.0,
            height: 150.0,
        }
    }
}

impl SquareToRoundInput {
    /// Parse from raw text fields.
    pub fn from_strs(
        base_width: &str,
        base_depth: &str,
        top_diameter: &str,
        height: &str,
    ) -> Result<Self> {
        Ok(Self {
            base_width: parse_length("base width", base_width)?,
            base_depth: parse_length("base depth", base_depth)?,
            top_diameter: parse_length("top diameter", top_diameter)?,
            height: parse_length("height", height)?,
        })
    }

    /// Resolve the quarter pattern.
    pub fn resolve(&self) -> Result<SquareToRoundResult> {
        square_to_round::resolve(
            self.base_width,
            self.base_depth,
            self.top_diameter,
            self.height,
        )
    }
}

/// Dimensions of a truncated cone (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeInput {
    /// Diameter at the wide end.
    pub large_diameter: f64,
    /// Diameter at the narrow end.
    pub small_diameter: f64,
    /// Vertical height.
    pub height: f64,
}

impl Default for ConeInput {
    fn default() -> Self {
        Self {
            large_diameter: 200.0,
            small_diameter: 100.0,
            height: 150.0,
        }
    }
}

impl ConeInput {
    /// Parse from raw text fields.
    pub fn from_strs(large_diameter: &str, small_diameter: &str, height: &str) -> Result<Self> {
        Ok(Self {
            large_diameter: parse_length("large diameter", large_diameter)?,
            small_diameter: parse_length("small diameter", small_diameter)?,
            height: parse_length("height", height)?,
        })
    }

    /// Resolve the annular-sector pattern.
    pub fn resolve(&self) -> Result<ConeResult> {
        cone::resolve(self.large_diameter, self.small_diameter, self.height)
    }
}

/// Dimensions of a segmented (lobster-back) bend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentBendInput {
    /// Pipe diameter (mm).
    pub diameter: f64,
    /// Centerline bend radius (mm).
    pub radius: f64,
    /// Total bend angle (degrees).
    pub angle: f64,
    /// Number of pieces, end pieces included.
    pub segments: u32,
}

impl Default for SegmentBendInput {
    fn default() -> Self {
        Self {
            diameter: 100.0,
            radius: 150.0,
            angle: 90.0,
            segments: 3,
        }
    }
}

impl SegmentBendInput {
    /// Parse from raw text fields.
    pub fn from_strs(diameter: &str, radius: &str, angle: &str, segments: &str) -> Result<Self> {
        Ok(Self {
            diameter: parse_length("diameter", diameter)?,
            radius: parse_length("radius", radius)?,
            angle: parse_length("angle", angle)?,
            segments: parse_count("segments", segments)?,
        })
    }

    /// Resolve the middle-segment pattern.
    pub fn resolve(&self) -> Result<SegmentBendResult> {
        segment_bend::resolve(self.diameter, self.radius, self.angle, self.segments)
    }
}
