//! Read-only projection of slider state for renderers.
//!
//! A `SliderView` is rebuilt from scratch whenever the renderer draws; it
//! holds no state of its own and never feeds back into the slider.

use crate::region::Region;
use crate::slider::RangeSlider;
use crate::ticks::{ticks, Tick};

/// A region band positioned along the track.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBand<'a> {
    pub region: &'a Region,
    /// Left edge (0.0-1.0).
    pub start_fraction: f64,
    /// Width as a fraction of the track.
    pub width_fraction: f64,
}

/// A marked point positioned along the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub point: f64,
    pub fraction: f64,
}

/// Everything a renderer needs to draw the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView<'a> {
    pub value: f64,
    /// Width of the value fill (0.0-1.0).
    pub value_fraction: f64,
    pub region: Option<&'a Region>,
    pub bands: Vec<RegionBand<'a>>,
    pub markers: Vec<Marker>,
    pub ticks: Vec<Tick>,
    pub line_thickness: f32,
    pub hovered: bool,
    pub pointer_fraction: f64,
    /// The value preview is shown while hovering, unless the value is
    /// already a marked point (its marker label shows it instead).
    pub show_preview: bool,
}

impl<'a> SliderView<'a> {
    /// Project a slider's current state.
    pub fn of(slider: &'a RangeSlider) -> Self {
        let config = slider.config();
        let mapper = slider.mapper();
        let domain = mapper.domain();
        let value = slider.value();

        let bands = config
            .regions
            .iter()
            .map(|region| RegionBand {
                region,
                start_fraction: domain.fraction_of(region.start),
                width_fraction: region.span() / domain.span(),
            })
            .collect();

        let markers = slider
            .points()
            .iter()
            .map(|point| Marker {
                point,
                fraction: domain.fraction_of(point),
            })
            .collect();

        Self {
            value,
            value_fraction: mapper.fraction_of(value),
            region: slider.region(),
            bands,
            markers,
            ticks: ticks(config),
            line_thickness: config.line_thickness,
            hovered: slider.is_hovered(),
            pointer_fraction: slider.pointer_fraction(),
            show_preview: slider.is_hovered() && !slider.points().contains(value),
        }
    }
}
