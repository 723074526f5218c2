//! Immutable plot configuration.
//!
//! Every layout value, title and the data path live here instead of in globals.
//! Defaults reproduce a 1000x500 canvas laid out on a 50 px unit.

use crate::constants;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout, text and data settings for one plot window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Data file to read at startup
    pub data_path: PathBuf,
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Layout unit in pixels
    pub unit: f32,
    /// Extra window width reserved for legend labels
    pub legend_margin: f32,
    /// Diameter of each data point
    pub point_diameter: f32,
    /// Native window title
    pub window_title: String,
    /// Title drawn above the plot
    pub chart_title: String,
    /// Name drawn at the end of the x-axis
    pub x_name: String,
    /// Name drawn at the end of the y-axis
    pub y_name: String,
    /// Seed for category colors
    pub seed: u64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(constants::DEFAULT_DATA_PATH),
            canvas_width: constants::CANVAS_WIDTH,
            canvas_height: constants::CANVAS_HEIGHT,
            unit: constants::UNIT,
            legend_margin: constants::LEGEND_MARGIN,
            point_diameter: constants::POINT_DIAMETER,
            window_title: constants::DEFAULT_TITLE.to_string(),
            chart_title: constants::DEFAULT_TITLE.to_string(),
            x_name: "x".to_string(),
            y_name: "y".to_string(),
            seed: constants::DEFAULT_SEED,
        }
    }
}

impl PlotConfig {
    /// Serialize the configuration to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a configuration from a JSON string; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Builds the configuration for the binary.
    ///
    /// Uses the defaults unless the `SCATTER_PLOT_CONFIG` environment variable
    /// names a JSON file, whose fields then override them.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(constants::CONFIG_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Checks that the layout leaves room for at least two ticks on each axis
    /// and stays within a bounded number of units per side.
    pub fn validate(&self) -> Result<()> {
        if !(self.unit.is_finite() && self.unit > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "unit must be positive, got {}",
                self.unit
            )));
        }
        for (name, side) in [("width", self.canvas_width), ("height", self.canvas_height)] {
            let units = side / self.unit;
            if !units.is_finite() || units < 5.0 {
                return Err(Error::InvalidConfig(format!(
                    "canvas {name} {side} is smaller than 5 units ({} px)",
                    5.0 * self.unit
                )));
            }
            if units > constants::MAX_UNITS_PER_SIDE {
                return Err(Error::InvalidConfig(format!(
                    "canvas {name} {side} exceeds {} units",
                    constants::MAX_UNITS_PER_SIDE
                )));
            }
        }
        for (name, value) in [
            ("point diameter", self.point_diameter),
            ("legend margin", self.legend_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and not negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Window inner size: the canvas plus the legend margin.
    pub fn window_size(&self) -> [f32; 2] {
        [self.canvas_width + self.legend_margin, self.canvas_height]
    }
}
