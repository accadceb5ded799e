//! Range Slider Core Library
//!
//! Platform-agnostic value mapping and point management for an interactive
//! range slider: pointer fractions become snapped, region-clamped values,
//! and marked points are toggled within a tolerance window.

pub mod config;
pub mod handle;
pub mod input;
pub mod mapper;
pub mod points;
pub mod region;
pub mod slider;
pub mod ticks;
pub mod view;

pub use config::{ConfigError, ConfigResult, SliderConfig};
pub use handle::SliderHandle;
pub use input::{fraction_from_position, SliderEvent, SliderResponse};
pub use mapper::{snap_to_increment, ValueMapper};
pub use points::{PointSet, Toggle};
pub use region::{region_for, Domain, Region};
pub use slider::RangeSlider;
pub use ticks::{format_value, ticks, Tick, MAX_TICKS};
pub use view::{Marker, RegionBand, SliderView};
