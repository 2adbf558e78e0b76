//! platkit CLI - flat-pattern calculator for sheet-metal work
//!
//! Resolves one pattern per invocation, prints a report and optionally
//! writes the developed outline as DXF or SVG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use platkit_export::SvgOptions;
use platkit_pattern::input::{parse_count, parse_length, parse_number};
use platkit_pattern::{profile, FlatPattern, PatternError, ProfileLeg};

mod config;
mod report;

use config::Config;

#[derive(Parser)]
#[command(name = "platkit")]
#[command(about = "Flat-pattern calculator for sheet-metal work", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file with default dimensions (default: ./platkit.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    /// Write the flat pattern to a file (format by extension: .dxf, .svg)
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Decimal places in the text report
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Log more (-v debug, -vv trace); PLATKIT_LOG is used otherwise
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Quarter pattern of a square-to-round transition
    SquareToRound {
        /// Width of the square base (mm)
        #[arg(long)]
        width: Option<String>,
        /// Depth of the square base (mm), must equal the width
        #[arg(long)]
        depth: Option<String>,
        /// Diameter of the round top (mm)
        #[arg(long)]
        top: Option<String>,
        /// Height between base and top (mm)
        #[arg(long)]
        height: Option<String>,
    },
    /// Annular sector of a truncated cone
    Cone {
        /// Large end diameter (mm)
        #[arg(long)]
        large: Option<String>,
        /// Small end diameter (mm)
        #[arg(long)]
        small: Option<String>,
        /// Height (mm)
        #[arg(long)]
        height: Option<String>,
    },
    /// Cut curve of the middle piece of a segmented bend
    SegmentBend {
        /// Pipe diameter (mm)
        #[arg(long)]
        diameter: Option<String>,
        /// Centerline bend radius (mm)
        #[arg(long)]
        radius: Option<String>,
        /// Total bend angle (degrees)
        #[arg(long)]
        angle: Option<String>,
        /// Number of pieces, end pieces included
        #[arg(long)]
        segments: Option<String>,
    },
    /// Blank width and outline of a bent profile
    Profile {
        /// Profile leg as LENGTH:ANGLE, repeat in order (angle defaults to 0)
        #[arg(long = "leg", value_name = "LENGTH:ANGLE")]
        legs: Vec<String>,
        /// Run length of the finished profile (mm), reports the sheet area
        #[arg(long)]
        length: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::discover(cli.config.as_deref())?;
    let pattern = resolve(&cli.command, &config)?;
    tracing::debug!(kind = pattern.name(), "resolved pattern");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report::write_json(&mut out, &pattern)?;
    } else {
        let precision = cli.precision.unwrap_or(config.output.precision);
        report::write_text(&mut out, &pattern, precision)?;
    }

    if let Some(path) = &cli.out {
        let drawing = platkit_export::layout(&pattern);
        let options = SvgOptions {
            stroke_width: config.output.svg_stroke_width,
            ..Default::default()
        };
        platkit_export::export(&drawing, path, &options)
            .with_context(|| format!("Failed to export {}", path.display()))?;
        if !cli.json {
            writeln!(out, "\nExported {} to {}", pattern.name(), path.display())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("PLATKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .finish(),
    )?;
    Ok(())
}

/// Merge command-line values over the config and resolve the pattern.
fn resolve(command: &Commands, config: &Config) -> Result<FlatPattern> {
    let pattern: FlatPattern = match command {
        Commands::SquareToRound {
            width,
            depth,
            top,
            height,
        } => {
            let mut input = config.square_to_round;
            override_length(&mut input.base_width, "base width", width.as_deref())?;
            override_length(&mut input.base_depth, "base depth", depth.as_deref())?;
            override_length(&mut input.top_diameter, "top diameter", top.as_deref())?;
            override_length(&mut input.height, "height", height.as_deref())?;
            input.resolve()?.into()
        }
        Commands::Cone {
            large,
            small,
            height,
        } => {
            let mut input = config.cone;
            override_length(&mut input.large_diameter, "large diameter", large.as_deref())?;
            override_length(&mut input.small_diameter, "small diameter", small.as_deref())?;
            override_length(&mut input.height, "height", height.as_deref())?;
            input.resolve()?.into()
        }
        Commands::SegmentBend {
            diameter,
            radius,
            angle,
            segments,
        } => {
            let mut input = config.segment_bend;
            override_length(&mut input.diameter, "diameter", diameter.as_deref())?;
            override_length(&mut input.radius, "radius", radius.as_deref())?;
            override_length(&mut input.angle, "angle", angle.as_deref())?;
            if let Some(text) = segments {
                input.segments = parse_count("segments", text)?;
            }
            input.resolve()?.into()
        }
        Commands::Profile { legs, length } => {
            let legs = if legs.is_empty() {
                config.profile.legs.clone()
            } else {
                legs.iter()
                    .map(|text| parse_leg(text))
                    .collect::<std::result::Result<Vec<_>, _>>()?
            };
            let length = match length {
                Some(text) => Some(parse_length("profile length", text)?),
                None => config.profile.length,
            };
            profile::resolve_with_length(&legs, length)?.into()
        }
    };
    Ok(pattern)
}

fn override_length(
    target: &mut f64,
    field: &str,
    text: Option<&str>,
) -> std::result::Result<(), PatternError> {
    if let Some(text) = text {
        *target = parse_length(field, text)?;
    }
    Ok(())
}

/// Parse `LENGTH:ANGLE` or a bare `LENGTH`.
fn parse_leg(text: &str) -> std::result::Result<ProfileLeg, PatternError> {
    let (length, angle) = match text.split_once(':') {
        Some((length, angle)) => (length, Some(angle)),
        None => (text, None),
    };
    let length = parse_number("leg length", length)?;
    let angle = match angle {
        Some(angle) => parse_number("leg angle", angle)?,
        None => 0.0,
    };
    Ok(ProfileLeg::new(length, angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platkit_pattern::ErrorKind;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_leg() {
        assert_eq!(parse_leg("100:90").unwrap(), ProfileLeg::new(100.0, 90.0));
        assert_eq!(parse_leg("12,5").unwrap(), ProfileLeg::new(12.5, 0.0));
        assert!(parse_leg("ten:90").is_err());
        assert!(parse_leg("10:").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["platkit", "cone", "--height", "80"]).unwrap();
        let pattern = resolve(&cli.command, &Config::default()).unwrap();
        let FlatPattern::Cone(cone) = pattern else {
            panic!("expected a cone");
        };
        let expected = platkit_pattern::cone::resolve(200.0, 100.0, 80.0).unwrap();
        assert_eq!(cone, expected);
    }

    #[test]
    fn test_config_defaults_used() {
        let cli = Cli::try_parse_from(["platkit", "segment-bend", "--json"]).unwrap();
        assert!(cli.json);
        let pattern = resolve(&cli.command, &Config::default()).unwrap();
        assert_eq!(pattern.name(), "segment bend");
    }

    #[test]
    fn test_decimal_comma_flag() {
        let cli = Cli::try_parse_from([
            "platkit",
            "square-to-round",
            "--width",
            "250,5",
            "--depth",
            "250,5",
        ])
        .unwrap();
        let FlatPattern::SquareToRound(r) = resolve(&cli.command, &Config::default()).unwrap()
        else {
            panic!("expected square-to-round");
        };
        assert_eq!(r.chord_length, 250.5);
    }

    #[test]
    fn test_rectangular_base_rejected() {
        let cli = Cli::try_parse_from(["platkit", "square-to-round", "--depth", "150"]).unwrap();
        let err = resolve(&cli.command, &Config::default()).unwrap_err();
        let pattern_err = err.downcast_ref::<PatternError>().unwrap();
        assert_eq!(pattern_err.kind(), ErrorKind::UnsupportedGeometry);
    }

    #[test]
    fn test_profile_legs_from_flags() {
        let cli = Cli::try_parse_from([
            "platkit", "profile", "--leg", "20", "--leg", "50:90", "--leg", "20:90",
        ])
        .unwrap();
        let FlatPattern::Profile(p) = resolve(&cli.command, &Config::default()).unwrap() else {
            panic!("expected a profile");
        };
        assert_eq!(p.blank_width, 90.0);
        assert_eq!(p.points.len(), 4);
        assert_eq!(p.area_m2, None);
    }

    #[test]
    fn test_profile_length_gives_area() {
        let cli = Cli::try_parse_from(["platkit", "profile", "--length", "2000"]).unwrap();
        let FlatPattern::Profile(p) = resolve(&cli.command, &Config::default()).unwrap() else {
            panic!("expected a profile");
        };
        // default 155 mm blank over 2 m
        assert_eq!(p.length, Some(2000.0));
        assert!((p.area_m2.unwrap() - 0.31).abs() < 1e-12);
    }
}
