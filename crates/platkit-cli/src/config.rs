//! Default dimensions and output settings from `platkit.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use platkit_pattern::profile::default_legs;
use platkit_pattern::{ConeInput, ProfileLeg, SegmentBendInput, SquareToRoundInput};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "platkit.toml";

/// Everything a `platkit.toml` can set. Missing sections use defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[square_to_round]` default dimensions.
    pub square_to_round: SquareToRoundInput,
    /// `[cone]` default dimensions.
    pub cone: ConeInput,
    /// `[segment_bend]` default dimensions.
    pub segment_bend: SegmentBendInput,
    /// `[profile]` default legs and run length.
    pub profile: ProfileConfig,
    /// `[output]` report and export settings.
    pub output: OutputConfig,
}

/// Profile used when no `--leg` is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Legs in order from the first edge.
    pub legs: Vec<ProfileLeg>,
    /// Run length in millimetres, for the sheet area.
    pub length: Option<f64>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            legs: default_legs(),
            length: None,
        }
    }
}

/// Report and export settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places in the text report.
    pub precision: usize,
    /// SVG stroke width in millimetres.
    pub svg_stroke_width: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 1,
            svg_stroke_width: 1.0,
        }
    }
}

impl Config {
    /// Parse config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load `explicit` if given, else `platkit.toml` if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!("using {DEFAULT_CONFIG_FILE} from working directory");
            return Self::load(fallback);
        }
        Ok(Self::default())
    }
}
