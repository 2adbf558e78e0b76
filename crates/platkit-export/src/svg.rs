//! SVG export for previewing flat patterns.
//!
//! Drawings are in millimetres with Y up; SVG has Y down, so every point
//! is mirrored through the X axis before it is written. One `<g>` group
//! is emitted per layer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use platkit_math::{polar, Point2, Transform2};

use crate::drawing::{Drawing, Layer, Shape2D};
use crate::error::{ExportError, Result};

/// Styling for SVG output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Stroke width in millimetres.
    pub stroke_width: f64,
    /// Margin around the drawing extent in millimetres.
    pub padding: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            padding: 10.0,
        }
    }
}

impl Layer {
    fn svg_stroke(&self) -> &'static str {
        match self {
            Layer::Cut => "black",
            Layer::Bend => "red",
        }
    }
}

/// Write `drawing` as SVG to a file.
pub fn export_svg(drawing: &Drawing, path: impl AsRef<Path>, options: &SvgOptions) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_svg(drawing, &mut writer, options)?;
    writer.flush()?;
    tracing::info!(
        "wrote {} shapes to {}",
        drawing.shapes().len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write `drawing` as SVG to any writer.
pub fn write_svg(drawing: &Drawing, mut writer: impl Write, options: &SvgOptions) -> Result<()> {
    let bounds = drawing.bounds().ok_or(ExportError::EmptyDrawing)?;
    let view = bounds.padded(options.padding);
    let flip = Transform2::scale(1.0, -1.0);

    // Flipped extent: SVG min_y is the world max_y mirrored.
    let min_x = view.min.x;
    let min_y = -view.max.y;
    let width = view.width();
    let height = view.height();

    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.3}mm" height="{height:.3}mm" viewBox="{min_x:.3} {min_y:.3} {width:.3} {height:.3}">"#
    )?;
    writeln!(writer, "  <title>{}</title>", escape(&drawing.title))?;

    for layer in Layer::ALL {
        let mut shapes = drawing.shapes_on(layer).peekable();
        if shapes.peek().is_none() {
            continue;
        }
        let dash = match layer {
            Layer::Cut => "",
            Layer::Bend => r#" stroke-dasharray="10 5""#,
        };
        writeln!(
            writer,
            r#"  <g id="{}" fill="none" stroke="{}" stroke-width="{}"{dash}>"#,
            layer.name(),
            layer.svg_stroke(),
            options.stroke_width,
        )?;
        for shape in shapes {
            writeln!(writer, r#"    <path d="{}"/>"#, path_data(shape, &flip))?;
        }
        writeln!(writer, "  </g>")?;
    }

    writeln!(writer, "</svg>")?;
    Ok(())
}

/// SVG path commands for one shape, already mirrored into SVG space.
fn path_data(shape: &Shape2D, flip: &Transform2) -> String {
    let pt = |p: &Point2| {
        let q = flip.apply_point(p);
        // + 0.0 turns -0.0 into 0.0
        format!("{:.3},{:.3}", q.x + 0.0, q.y + 0.0)
    };

    match shape {
        Shape2D::Line { start, end, .. } => format!("M {} L {}", pt(start), pt(end)),
        Shape2D::Arc {
            center,
            radius,
            start_angle,
            sweep,
            ..
        } => {
            let from = polar(*center, *radius, *start_angle);
            if *sweep >= 360.0 {
                // A single SVG arc cannot close on itself; draw two halves.
                let half = polar(*center, *radius, start_angle + 180.0);
                return format!(
                    "M {} A {r:.3} {r:.3} 0 0 0 {} A {r:.3} {r:.3} 0 0 0 {} Z",
                    pt(&from),
                    pt(&half),
                    pt(&from),
                    r = radius
                );
            }
            let to = polar(*center, *radius, start_angle + sweep);
            let large_arc = if *sweep > 180.0 { 1 } else { 0 };
            // Counter-clockwise in world space is sweep-flag 0 once Y is flipped.
            format!(
                "M {} A {r:.3} {r:.3} 0 {large_arc} 0 {}",
                pt(&from),
                pt(&to),
                r = radius
            )
        }
        Shape2D::Polyline { points, closed, .. } => {
            let mut d = String::new();
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    d.push(' ');
                }
                d.push_str(if i == 0 { "M " } else { "L " });
                d.push_str(&pt(p));
            }
            if *closed && !points.is_empty() {
                d.push_str(" Z");
            }
            d
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
