//! Error types for flat-pattern resolution.

use thiserror::Error;

/// Errors that can occur while resolving a flat pattern.
///
/// Every failure rejects the whole input; no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A dimension is missing, non-numeric, non-finite or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The shape is valid but not handled by this resolver.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// Cone diameters are equal within tolerance, so the piece is a cylinder.
    #[error("diameters {large} and {small} are equal within tolerance; develop it as a cylinder")]
    DegenerateCone {
        /// Larger diameter as given (mm).
        large: f64,
        /// Smaller diameter as given (mm).
        small: f64,
    },

    /// The dimensions describe a physically impossible piece.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Fieldless classification of a [`PatternError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PatternError::InvalidInput`].
    InvalidInput,
    /// See [`PatternError::UnsupportedGeometry`].
    UnsupportedGeometry,
    /// See [`PatternError::DegenerateCone`].
    DegenerateCone,
    /// See [`PatternError::InvalidGeometry`].
    InvalidGeometry,
}

impl PatternError {
    /// The error's kind, for matching without inspecting messages.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatternError::InvalidInput(_) => ErrorKind::InvalidInput,
            PatternError::UnsupportedGeometry(_) => ErrorKind::UnsupportedGeometry,
            PatternError::DegenerateCone { .. } => ErrorKind::DegenerateCone,
            PatternError::InvalidGeometry(_) => ErrorKind::InvalidGeometry,
        }
    }
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            PatternError::InvalidInput("x".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            PatternError::DegenerateCone {
                large: 100.05,
                small: 100.0
            }
            .kind(),
            ErrorKind::DegenerateCone
        );
    }

    #[test]
    fn test_display() {
        let err = PatternError::UnsupportedGeometry("rectangular base".into());
        assert_eq!(err.to_string(), "unsupported geometry: rectangular base");

        let err = PatternError::DegenerateCone {
            large: 100.05,
            small: 100.0,
        };
        assert!(err.to_string().contains("cylinder"));
    }
}
