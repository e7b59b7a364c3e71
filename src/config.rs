//! User settings, read from an optional YAML file.

use crate::simulation::{DEFAULT_DENSITY, DEFAULT_GRID_SIZE, DEFAULT_SPEED_MS};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

pub const MAX_GRID_SIZE: usize = 512;
pub const MIN_CELL_SIZE: usize = 2;
pub const MAX_CELL_SIZE: usize = 64;
/// Largest rendered field side, `grid_size * cell_size`, in pixels.
pub const MAX_FIELD_PX: usize = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the field in cells
    pub grid_size: usize,
    /// Side length of a cell in pixels, including the 1 px gap
    pub cell_size: usize,
    /// Interval between generations in milliseconds (clamped on use)
    pub speed_ms: u32,
    /// Probability of a cell being alive after "Random"
    pub random_density: f64,
    /// Seed for "Random"; entropy when absent
    pub seed: Option<u64>,
    /// Preset loaded at startup
    pub initial_pattern: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: 12,
            speed_ms: DEFAULT_SPEED_MS,
            random_density: DEFAULT_DENSITY,
            seed: None,
            initial_pattern: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be between 1 and {MAX_GRID_SIZE}"
            )));
        }
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}"
            )));
        }
        let field_px = self.grid_size * self.cell_size;
        if field_px > MAX_FIELD_PX {
            return Err(ConfigError::Invalid(format!(
                "grid_size * cell_size is {field_px} px, at most {MAX_FIELD_PX} allowed"
            )));
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(ConfigError::Invalid(
                "random_density must be between 0 and 1".to_string(),
            ));
        }
        if let Some(name) = &self.initial_pattern {
            if crate::find_preset(name).is_none() {
                return Err(ConfigError::Invalid(format!("unknown pattern {name:?}")));
            }
        }
        Ok(())
    }
}
