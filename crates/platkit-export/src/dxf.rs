//! DXF export for flat patterns.
//!
//! Writes DXF R12 (AC1009) in millimetres, readable by shear, plasma and
//! laser cutting software. Layers:
//! - `CUT` - continuous, color 7 (white/black)
//! - `BEND` - dashed, color 1 (red)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use platkit_math::Point2;

use crate::drawing::{arc_end_angle, Drawing, Layer, Shape2D};
use crate::error::{ExportError, Result};

impl Layer {
    fn dxf_color(&self) -> u8 {
        match self {
            Layer::Cut => 7,
            Layer::Bend => 1,
        }
    }

    fn dxf_linetype(&self) -> &'static str {
        match self {
            Layer::Cut => "CONTINUOUS",
            Layer::Bend => "DASHED",
        }
    }
}

/// Write `drawing` as DXF to a file.
pub fn export_dxf(drawing: &Drawing, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_dxf(drawing, &mut writer)?;
    writer.flush()?;
    tracing::info!(
        "wrote {} shapes to {}",
        drawing.shapes().len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write `drawing` as DXF to any writer.
pub fn write_dxf(drawing: &Drawing, mut writer: impl Write) -> Result<()> {
    if drawing.is_empty() {
        return Err(ExportError::EmptyDrawing);
    }

    write_header(&mut writer)?;
    write_tables(&mut writer)?;

    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "ENTITIES")?;

    for shape in drawing.shapes() {
        match shape {
            Shape2D::Line { start, end, layer } => write_line(&mut writer, start, end, *layer)?,
            Shape2D::Arc {
                center,
                radius,
                start_angle,
                sweep,
                layer,
            } => write_arc(&mut writer, center, *radius, *start_angle, *sweep, *layer)?,
            Shape2D::Polyline {
                points,
                closed,
                layer,
            } => write_polyline(&mut writer, points, *closed, *layer)?,
        }
    }

    writeln!(writer, "0")?;
    writeln!(writer, "ENDSEC")?;

    // End of file
    writeln!(writer, "0")?;
    writeln!(writer, "EOF")?;

    Ok(())
}

fn write_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "HEADER")?;

    writeln!(writer, "9")?;
    writeln!(writer, "$ACADVER")?;
    writeln!(writer, "1")?;
    writeln!(writer, "AC1009")?; // DXF R12

    // Units = millimeters
    writeln!(writer, "9")?;
    writeln!(writer, "$INSUNITS")?;
    writeln!(writer, "70")?;
    writeln!(writer, "4")?;

    writeln!(writer, "0")?;
    writeln!(writer, "ENDSEC")?;

    Ok(())
}

fn write_tables(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "TABLES")?;

    write_ltype_table(writer)?;
    write_layer_table(writer)?;

    writeln!(writer, "0")?;
    writeln!(writer, "ENDSEC")?;

    Ok(())
}

fn write_ltype_table(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "TABLE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "LTYPE")?;
    writeln!(writer, "70")?;
    writeln!(writer, "2")?;

    writeln!(writer, "0")?;
    writeln!(writer, "LTYPE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "CONTINUOUS")?;
    writeln!(writer, "70")?;
    writeln!(writer, "0")?;
    writeln!(writer, "3")?;
    writeln!(writer, "Solid line")?;
    writeln!(writer, "72")?;
    writeln!(writer, "65")?;
    writeln!(writer, "73")?;
    writeln!(writer, "0")?;
    writeln!(writer, "40")?;
    writeln!(writer, "0.0")?;

    writeln!(writer, "0")?;
    writeln!(writer, "LTYPE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "DASHED")?;
    writeln!(writer, "70")?;
    writeln!(writer, "0")?;
    writeln!(writer, "3")?;
    writeln!(writer, "Dashed __ __ __")?;
    writeln!(writer, "72")?;
    writeln!(writer, "65")?;
    writeln!(writer, "73")?;
    writeln!(writer, "2")?; // dash, gap
    writeln!(writer, "40")?;
    writeln!(writer, "15.0")?;
    writeln!(writer, "49")?;
    writeln!(writer, "10.0")?;
    writeln!(writer, "49")?;
    writeln!(writer, "-5.0")?;

    writeln!(writer, "0")?;
    writeln!(writer, "ENDTAB")?;

    Ok(())
}

fn write_layer_table(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "TABLE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "LAYER")?;
    writeln!(writer, "70")?;
    writeln!(writer, "{}", Layer::ALL.len())?;

    for layer in Layer::ALL {
        writeln!(writer, "0")?;
        writeln!(writer, "LAYER")?;
        writeln!(writer, "2")?;
        writeln!(writer, "{}", layer.name())?;
        writeln!(writer, "70")?;
        writeln!(writer, "0")?;
        writeln!(writer, "62")?;
        writeln!(writer, "{}", layer.dxf_color())?;
        writeln!(writer, "6")?;
        writeln!(writer, "{}", layer.dxf_linetype())?;
    }

    writeln!(writer, "0")?;
    writeln!(writer, "ENDTAB")?;

    Ok(())
}

fn write_line(writer: &mut impl Write, start: &Point2, end: &Point2, layer: Layer) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "LINE")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{}", layer.name())?;
    writeln!(writer, "10")?;
    writeln!(writer, "{:.6}", start.x)?;
    writeln!(writer, "20")?;
    writeln!(writer, "{:.6}", start.y)?;
    writeln!(writer, "11")?;
    writeln!(writer, "{:.6}", end.x)?;
    writeln!(writer, "21")?;
    writeln!(writer, "{:.6}", end.y)?;

    Ok(())
}

fn write_arc(
    writer: &mut impl Write,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    layer: Layer,
) -> std::io::Result<()> {
    if sweep >= 360.0 {
        writeln!(writer, "0")?;
        writeln!(writer, "CIRCLE")?;
        writeln!(writer, "8")?;
        writeln!(writer, "{}", layer.name())?;
        writeln!(writer, "10")?;
        writeln!(writer, "{:.6}", center.x)?;
        writeln!(writer, "20")?;
        writeln!(writer, "{:.6}", center.y)?;
        writeln!(writer, "40")?;
        writeln!(writer, "{:.6}", radius)?;
        return Ok(());
    }

    writeln!(writer, "0")?;
    writeln!(writer, "ARC")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{}", layer.name())?;
    writeln!(writer, "10")?;
    writeln!(writer, "{:.6}", center.x)?;
    writeln!(writer, "20")?;
    writeln!(writer, "{:.6}", center.y)?;
    writeln!(writer, "40")?;
    writeln!(writer, "{:.6}", radius)?;
    writeln!(writer, "50")?;
    writeln!(writer, "{:.6}", platkit_math::normalize_degrees(start_angle))?;
    writeln!(writer, "51")?;
    writeln!(writer, "{:.6}", arc_end_angle(start_angle, sweep))?;

    Ok(())
}

fn write_polyline(
    writer: &mut impl Write,
    points: &[Point2],
    closed: bool,
    layer: Layer,
) -> std::io::Result<()> {
    if points.is_empty() {
        return Ok(());
    }

    // R12 has no LWPOLYLINE: POLYLINE header, VERTEX records, SEQEND
    writeln!(writer, "0")?;
    writeln!(writer, "POLYLINE")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{}", layer.name())?;
    writeln!(writer, "66")?;
    writeln!(writer, "1")?; // vertices follow
    writeln!(writer, "70")?;
    writeln!(writer, "{}", if closed { 1 } else { 0 })?;

    for point in points {
        writeln!(writer, "0")?;
        writeln!(writer, "VERTEX")?;
        writeln!(writer, "8")?;
        writeln!(writer, "{}", layer.name())?;
        writeln!(writer, "10")?;
        writeln!(writer, "{:.6}", point.x)?;
        writeln!(writer, "20")?;
        writeln!(writer, "{:.6}", point.y)?;
    }

    writeln!(writer, "0")?;
    writeln!(writer, "SEQEND")?;

    Ok(())
}
