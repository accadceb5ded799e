//! Slider configuration: domain, snapping, regions and display hints.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::{Domain, Region};

/// Default lower bound of the domain.
pub const DEFAULT_MIN: f64 = 100.0;
/// Default upper bound of the domain.
pub const DEFAULT_MAX: f64 = 20000.0;
/// Default value-fill thickness in pixels.
pub const DEFAULT_LINE_THICKNESS: f32 = 4.0;
/// Default spacing between labelled ticks.
pub const DEFAULT_MAJOR_STEP: f64 = 5000.0;
/// Default spacing between all ticks.
pub const DEFAULT_MINOR_STEP: f64 = 1000.0;
/// Default snapping increment.
pub const DEFAULT_INCREMENT: u32 = 25;
/// Default toggle matching window.
pub const DEFAULT_TOLERANCE: f64 = 100.0;

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Domain bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f64, max: f64 },
    #[error("Domain min must be below max (min={min}, max={max})")]
    InvalidDomain { min: f64, max: f64 },
    #[error("Increment must be positive")]
    ZeroIncrement,
    #[error("Tolerance must be a finite non-negative number, got {0}")]
    InvalidTolerance(f64),
    #[error("Line thickness must be positive, got {0}")]
    InvalidLineThickness(f32),
    #[error("{name} must be positive, got {step}")]
    InvalidTickStep { name: &'static str, step: f64 },
    #[error("Region {index} must have start < end (start={start}, end={end})")]
    InvalidRegion { index: usize, start: f64, end: f64 },
    #[error("Region {index} lies outside the domain (start={start}, end={end})")]
    RegionOutOfDomain { index: usize, start: f64, end: f64 },
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Construction-time configuration for a range slider.
///
/// Every field is optional in serialized form; missing fields fall back to
/// the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    /// Thickness of the value fill (display only).
    pub line_thickness: f32,
    /// Spacing of labelled ticks (display only).
    pub major_step: f64,
    /// Spacing of all ticks (display only).
    pub minor_step: f64,
    pub regions: Vec<Region>,
    pub increment: u32,
    pub tolerance: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            line_thickness: DEFAULT_LINE_THICKNESS,
            major_step: DEFAULT_MAJOR_STEP,
            minor_step: DEFAULT_MINOR_STEP,
            regions: Vec::new(),
            increment: DEFAULT_INCREMENT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SliderConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the domain bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the snapping increment.
    pub fn with_increment(mut self, increment: u32) -> Self {
        self.increment = increment;
        self
    }

    /// Set the toggle tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the region bands.
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// Set the tick spacing.
    pub fn with_steps(mut self, major_step: f64, minor_step: f64) -> Self {
        self.major_step = major_step;
        self.minor_step = minor_step;
        self
    }

    /// Set the value fill thickness.
    pub fn with_line_thickness(mut self, thickness: f32) -> Self {
        self.line_thickness = thickness;
        self
    }

    /// The configured domain.
    pub fn domain(&self) -> Domain {
        Domain::new(self.min, self.max)
    }

    /// Check the configuration for caller defects.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min >= self.max {
            return Err(ConfigError::InvalidDomain {
                min: self.min,
                max: self.max,
            });
        }
        if self.increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if !(self.line_thickness > 0.0) {
            return Err(ConfigError::InvalidLineThickness(self.line_thickness));
        }
        for (name, step) in [("majorStep", self.major_step), ("minorStep", self.minor_step)] {
            if !(step > 0.0) {
                return Err(ConfigError::InvalidTickStep { name, step });
            }
        }

        let domain = self.domain();
        for (index, region) in self.regions.iter().enumerate() {
            if !(region.start < region.end) {
                return Err(ConfigError::InvalidRegion {
                    index,
                    start: region.start,
                    end: region.end,
                });
            }
            if !domain.contains(region.start) || !domain.contains(region.end) {
                return Err(ConfigError::RegionOutOfDomain {
                    index,
                    start: region.start,
                    end: region.end,
                });
            }
        }

        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate().inspect_err(|e| {
            log::warn!("Rejected slider config {}: {}", path.display(), e);
        })?;

        log::debug!(
            "Loaded slider config from {} ({} regions)",
            path.display(),
            config.regions.len()
        );
        Ok(config)
    }
}
