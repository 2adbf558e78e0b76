#![warn(missing_docs)]

//! Flat-pattern development for sheet-metal work.
//!
//! This crate computes the 2D developed ("unfolded") patterns for the
//! pieces a sheet-metal worker lays out by hand:
//!
//! - **Square-to-round** transitions, as one of four identical quarters
//! - **Cones** (frustums), as an annular sector
//! - **Segment bends** (lobster backs), as the cut curve of a middle piece
//! - **Profiles** (bent flashings), as blank width and traced outline
//!
//! Every resolver is a pure function: dimensions in, a complete result or
//! a [`PatternError`] out. Lengths are millimetres, angles are degrees.
//!
//! # Example
//!
//! ```
//! use platkit_pattern::cone;
//!
//! let pattern = cone::resolve(200.0, 100.0, 150.0).unwrap();
//! assert!((pattern.arc_angle - 113.84).abs() < 0.1);
//! assert!((pattern.outer_radius - pattern.inner_radius - pattern.slant_height).abs() < 1e-9);
//! ```

pub mod cone;
pub mod error;
pub mod input;
pub mod profile;
pub mod segment_bend;
pub mod square_to_round;

pub use cone::ConeResult;
pub use error::{ErrorKind, PatternError, Result};
pub use input::{ConeInput, SegmentBendInput, SquareToRoundInput};
pub use profile::{ProfileLeg, ProfileResult};
pub use segment_bend::{CurvePoint, CutCurve, SegmentBendResult, SAMPLE_STEPS};
pub use square_to_round::SquareToRoundResult;

use serde::Serialize;

/// Any resolved flat pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlatPattern {
    /// Quarter of a square-to-round transition.
    SquareToRound(SquareToRoundResult),
    /// Truncated cone.
    Cone(ConeResult),
    /// Middle piece of a segmented bend.
    SegmentBend(SegmentBendResult),
    /// Bent flashing profile.
    Profile(ProfileResult),
}

impl FlatPattern {
    /// Short human-readable name of the pattern kind.
    pub fn name(&self) -> &'static str {
        match self {
            FlatPattern::SquareToRound(_) => "square-to-round",
            FlatPattern::Cone(_) => "cone",
            FlatPattern::SegmentBend(_) => "segment bend",
            FlatPattern::Profile(_) => "profile",
        }
    }
}

impl From<SquareToRoundResult> for FlatPattern {
    fn from(result: SquareToRoundResult) -> Self {
        FlatPattern::SquareToRound(result)
    }
}

impl From<ConeResult> for FlatPattern {
    fn from(result: ConeResult) -> Self {
        FlatPattern::Cone(result)
    }
}

impl From<SegmentBendResult> for FlatPattern {
    fn from(result: SegmentBendResult) -> Self {
        FlatPattern::SegmentBend(result)
    }
}

impl From<ProfileResult> for FlatPattern {
    fn from(result: ProfileResult) -> Self {
        FlatPattern::Profile(result)
    }
}
