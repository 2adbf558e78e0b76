#![warn(missing_docs)]

//! Layout and file export for platkit flat patterns.
//!
//! [`layout`] turns a resolved [`FlatPattern`](platkit_pattern::FlatPattern)
//! into a [`Drawing`] of lines, arcs and polylines on `CUT` and `BEND`
//! layers. The drawing can then be written as DXF for cutting software or
//! SVG for preview.
//!
//! ```no_run
//! use platkit_export::{export, layout};
//! use platkit_pattern::{cone, FlatPattern};
//!
//! let pattern: FlatPattern = cone::resolve(200.0, 100.0, 150.0)?.into();
//! export(&layout(&pattern), "cone.dxf", &Default::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod drawing;
pub mod dxf;
pub mod error;
pub mod layout;
pub mod svg;

use std::path::Path;

pub use drawing::{Drawing, Layer, Shape2D};
pub use dxf::{export_dxf, write_dxf};
pub use error::{ExportError, Result};
pub use layout::layout;
pub use svg::{export_svg, write_svg, SvgOptions};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// DXF R12 drawing.
    Dxf,
    /// SVG preview.
    Svg,
}

impl ExportFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("dxf") => Ok(ExportFormat::Dxf),
            Some("svg") => Ok(ExportFormat::Svg),
            _ => Err(ExportError::UnknownFormat(path.display().to_string())),
        }
    }
}

/// Write `drawing` to `path`, choosing DXF or SVG by extension.
pub fn export(drawing: &Drawing, path: impl AsRef<Path>, svg_options: &SvgOptions) -> Result<()> {
    match ExportFormat::from_path(path.as_ref())? {
        ExportFormat::Dxf => export_dxf(drawing, path),
        ExportFormat::Svg => export_svg(drawing, path, svg_options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("a/b.dxf").unwrap(), ExportFormat::Dxf);
        assert_eq!(ExportFormat::from_path("PIECE.SVG").unwrap(), ExportFormat::Svg);
        assert!(matches!(
            ExportFormat::from_path("piece.pdf"),
            Err(ExportError::UnknownFormat(_))
        ));
        assert!(ExportFormat::from_path("piece").is_err());
    }

    #[test]
    fn test_export_by_extension() {
        let pattern: platkit_pattern::FlatPattern = platkit_pattern::cone::resolve(200.0, 100.0, 150.0).unwrap().into();
        let drawing = layout(&pattern);
        let path = std::env::temp_dir().join("platkit_test_export.svg");
        export(&drawing, &path, &SvgOptions::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        std::fs::remove_file(&path).ok();
    }
}
