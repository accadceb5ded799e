//! Domain bounds and colored region bands.

use serde::{Deserialize, Serialize};

/// The closed numeric range `[min, max]` a slider operates on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Create a new domain. Callers guarantee `min < max`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value lies inside the domain (inclusive). NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the domain.
    pub fn clamp(&self, value: f64) -> f64 {
        // Not f64::clamp: that panics on an inverted domain.
        value.max(self.min).min(self.max)
    }

    /// Value at a normalized position along the domain.
    pub fn value_at(&self, fraction: f64) -> f64 {
        fraction * self.span() + self.min
    }

    /// Normalized position (0.0-1.0) of a value inside the domain.
    pub fn fraction_of(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// A colored sub-range of the domain.
///
/// Regions pull snapped values that land inside them toward their own
/// bounds. Overlaps are allowed; the first region in definition order wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub start: f64,
    pub end: f64,
    /// CSS-style color string, e.g. `#FFB3BA`.
    pub color: String,
}

impl Region {
    /// Create a new region.
    pub fn new(start: f64, end: f64, color: impl Into<String>) -> Self {
        Self {
            start,
            end,
            color: color.into(),
        }
    }

    /// Check if a value lies inside the region (both ends inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Clamp a value into the region's bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        self.end.min(self.start.max(value))
    }

    /// Width of the region.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Find the first region (in definition order) containing `value`.
pub fn region_for(regions: &[Region], value: f64) -> Option<&Region> {
    regions.iter().find(|region| region.contains(value))
}
