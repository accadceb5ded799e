//! Pointer fraction to domain value conversion.
//!
//! Mapping is pure: a fraction is scaled into the domain, snapped to the
//! increment lattice anchored at `min`, pulled into the governing region and
//! finally clamped into the domain.

use crate::config::SliderConfig;
use crate::region::{region_for, Domain, Region};

/// Snap a raw domain value to the nearest `min + k * increment`.
///
/// Uses `f64::round`, so exact midpoints round half away from zero.
/// A value that would round past `max` steps back one increment to stay on
/// the lattice.
pub fn snap_to_increment(raw: f64, domain: Domain, increment: f64) -> f64 {
    let steps = ((raw - domain.min) / increment).round();
    let snapped = domain.min + steps * increment;
    if snapped > domain.max {
        snapped - increment
    } else {
        snapped
    }
}

/// Stateless converter from normalized pointer positions to slider values.
#[derive(Debug, Clone, Copy)]
pub struct ValueMapper<'a> {
    domain: Domain,
    increment: f64,
    regions: &'a [Region],
}

impl<'a> ValueMapper<'a> {
    /// Create a mapper over a slider configuration.
    pub fn new(config: &'a SliderConfig) -> Self {
        Self::from_parts(config.domain(), config.increment, &config.regions)
    }

    /// Create a mapper from individual parts.
    pub fn from_parts(domain: Domain, increment: u32, regions: &'a [Region]) -> Self {
        Self {
            domain,
            increment: f64::from(increment),
            regions,
        }
    }

    /// The domain this mapper maps into.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Map a fraction in `[0, 1]` to a snapped, region-clamped value.
    ///
    /// The caller clamps the fraction; values outside `[0, 1]` are still
    /// pulled back into the domain by the final clamp.
    pub fn map_fraction(&self, fraction: f64) -> f64 {
        let raw = self.domain.value_at(fraction);
        let snapped = snap_to_increment(raw, self.domain, self.increment);

        let value = match self.region_for(snapped) {
            Some(region) => region.clamp(snapped),
            None => snapped,
        };

        self.domain.clamp(value)
    }

    /// First region (definition order) whose inclusive range contains `value`.
    pub fn region_for(&self, value: f64) -> Option<&'a Region> {
        region_for(self.regions, value)
    }

    /// Normalized position of a value along the track.
    pub fn fraction_of(&self, value: f64) -> f64 {
        self.domain.fraction_of(value)
    }
}
