//! Text and JSON reports for resolved patterns.

use std::io::{self, Write};

use platkit_pattern::{ConeResult, FlatPattern, ProfileResult, SegmentBendResult, SquareToRoundResult};

/// Serialize `pattern` as pretty JSON.
pub fn write_json(out: &mut impl Write, pattern: &FlatPattern) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, pattern)?;
    writeln!(out)?;
    Ok(())
}

/// Write a labelled report with `precision` decimal places.
pub fn write_text(out: &mut impl Write, pattern: &FlatPattern, precision: usize) -> io::Result<()> {
    match pattern {
        FlatPattern::SquareToRound(r) => square_to_round(out, r, precision),
        FlatPattern::Cone(r) => cone(out, r, precision),
        FlatPattern::SegmentBend(r) => segment_bend(out, r, precision),
        FlatPattern::Profile(r) => profile(out, r, precision),
    }
}

fn row(out: &mut impl Write, label: &str, value: f64, unit: &str, p: usize) -> io::Result<()> {
    writeln!(out, "  {label:<20} {value:>10.p$} {unit}")
}

fn square_to_round(out: &mut impl Write, r: &SquareToRoundResult, p: usize) -> io::Result<()> {
    writeln!(out, "Square-to-round, one of four quarters")?;
    row(out, "Pattern height", r.pattern_height, "mm", p)?;
    row(out, "Outer arc radius", r.outer_arc_radius, "mm", p)?;
    row(out, "Inner arc radius", r.inner_arc_radius, "mm", p)?;
    row(out, "Chord length", r.chord_length, "mm", p)?;
    row(out, "Arc angle", r.arc_angle, "deg", p)
}

fn cone(out: &mut impl Write, r: &ConeResult, p: usize) -> io::Result<()> {
    writeln!(out, "Cone")?;
    row(out, "Outer radius", r.outer_radius, "mm", p)?;
    row(out, "Inner radius", r.inner_radius, "mm", p)?;
    row(out, "Slant height", r.slant_height, "mm", p)?;
    row(out, "Arc angle", r.arc_angle, "deg", p)
}

fn segment_bend(out: &mut impl Write, r: &SegmentBendResult, p: usize) -> io::Result<()> {
    writeln!(out, "Segment bend, middle segment")?;
    writeln!(out, "  {:<20} {:>10}", "Welded joints", r.joints)?;
    row(out, "Cut angle", r.cut_angle, "deg", p)?;
    row(out, "Segment angle", r.segment_angle, "deg", p)?;
    row(out, "Circumference", r.circumference, "mm", p)?;
    row(out, "Max height", r.max_height, "mm", p)?;
    row(out, "Middle height", r.middle_height, "mm", p)?;
    row(out, "Min height", r.min_height, "mm", p)?;

    writeln!(out)?;
    writeln!(out, "  {:>8} {:>10} {:>10}", "angle", "x", "y")?;
    for point in &r.coordinates {
        writeln!(
            out,
            "  {:>8.p$} {:>10.p$} {:>10.p$}",
            point.angle, point.x, point.y
        )?;
    }
    Ok(())
}

fn profile(out: &mut impl Write, r: &ProfileResult, p: usize) -> io::Result<()> {
    writeln!(out, "Profile")?;
    row(out, "Blank width", r.blank_width, "mm", p)?;
    row(out, "Profile width", r.bounds.width(), "mm", p)?;
    row(out, "Profile height", r.bounds.height(), "mm", p)?;
    if let (Some(length), Some(area)) = (r.length, r.area_m2) {
        row(out, "Profile length", length, "mm", p)?;
        row(out, "Total area", area, "m²", p.max(3))?;
    }

    writeln!(out)?;
    writeln!(out, "  {:>10} {:>10}", "x", "y")?;
    for point in &r.points {
        writeln!(out, "  {:>10.p$} {:>10.p$}", point.x, point.y)?;
    }
    Ok(())
}
