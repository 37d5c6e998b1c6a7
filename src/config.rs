//! Game Configuration
//!
//! Settings load from an optional `nibbles.ron` in the working directory.
//! A missing file is the normal case and runs the built-in defaults; a
//! broken or out-of-range file is reported and corrected rather than
//! refusing to start.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Config file looked up next to the executable's working directory.
pub const CONFIG_PATH: &str = "nibbles.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield size in cells.
    #[serde(default = "default_grid_width")]
    pub grid_width: i32,
    #[serde(default = "default_grid_height")]
    pub grid_height: i32,
    /// Pixels per cell; the window is the grid times this.
    #[serde(default = "default_cell_px")]
    pub cell_px: i32,
    /// Seconds between fixed logic steps.
    #[serde(default = "default_logic_interval")]
    pub logic_interval: f32,
    /// Seconds between draw passes.
    #[serde(default = "default_render_interval")]
    pub render_interval: f32,
    /// Score at which the rotten apple appears.
    #[serde(default = "default_rotten_threshold")]
    pub rotten_threshold: u32,
    /// Seconds the final frame stays up after the round ends.
    #[serde(default = "default_over_hold")]
    pub over_hold: f32,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_grid_width() -> i32 {
    32
}

fn default_grid_height() -> i32 {
    24
}

fn default_cell_px() -> i32 {
    20
}

fn default_logic_interval() -> f32 {
    0.10
}

fn default_render_interval() -> f32 {
    1.0 / 60.0
}

fn default_rotten_threshold() -> u32 {
    10
}

fn default_over_hold() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    1.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
            cell_px: default_cell_px(),
            logic_interval: default_logic_interval(),
            render_interval: default_render_interval(),
            rotten_threshold: default_rotten_threshold(),
            over_hold: default_over_hold(),
            volume: default_volume(),
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = ron::from_str(&text)?;
        Ok(config.sanitized())
    }

    /// Load `nibbles.ron` if present; a missing file silently runs the
    /// defaults, anything else is reported first.
    pub fn load_or_default() -> Self {
        match Self::load(Path::new(CONFIG_PATH)) {
            Ok(config) => config,
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}, using defaults", CONFIG_PATH, e);
                Self::default()
            }
        }
    }

    /// Pull every field back into its working range.
    pub fn sanitized(mut self) -> Self {
        self.grid_width = clamp_i32("grid_width", self.grid_width, 8, 128);
        self.grid_height = clamp_i32("grid_height", self.grid_height, 8, 128);
        self.cell_px = clamp_i32("cell_px", self.cell_px, 4, 64);
        self.logic_interval = clamp_f32("logic_interval", self.logic_interval, 0.02, 1.0);
        self.render_interval = clamp_f32("render_interval", self.render_interval, 0.001, 0.1);
        self.over_hold = clamp_f32("over_hold", self.over_hold, 0.0, 10.0);
        self.volume = clamp_f32("volume", self.volume, 0.0, 1.0);
        self
    }
}

fn clamp_i32(name: &str, value: i32, lo: i32, hi: i32) -> i32 {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        eprintln!("Config {} = {} out of range, using {}", name, value, clamped);
    }
    clamped
}

fn clamp_f32(name: &str, value: f32, lo: f32, hi: f32) -> f32 {
    // NaN compares false everywhere, so send it to the low bound.
    if !value.is_finite() {
        eprintln!("Config {} = {} is not a number, using {}", name, value, lo);
        return lo;
    }
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        eprintln!("Config {} = {} out of range, using {}", name, value, clamped);
    }
    clamped
}
