//! egui rendering and input wiring for the interactive range slider.
//!
//! - **Slider**: track, region bands, value fill, ticks, point markers and
//!   the hover value preview, with pointer input forwarded to the core
//! - **Colors**: CSS hex parsing for region colors
//! - **Controls**: text buttons that drive the slider's imperative handle

pub mod colors;
pub mod controls;
pub mod slider;

pub use colors::{parse_css_color, region_color};
pub use controls::{point_controls, PointButton};
pub use slider::{RangeSliderWidget, SliderStyle};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of the track.
    pub const TRACK_HEIGHT: f32 = 32.0;
    /// Height reserved above the track for the value preview.
    pub const PREVIEW_ROW: f32 = 22.0;
    /// Height reserved above the track for marker labels.
    pub const LABEL_ROW: f32 = 22.0;
    /// Height reserved below the track for tick labels.
    pub const TICK_ROW: f32 = 18.0;
    /// Major tick height
    pub const MAJOR_TICK: f32 = 12.0;
    /// Minor tick height
    pub const MINOR_TICK: f32 = 8.0;
    /// Marker dot radius
    pub const MARKER_RADIUS: f32 = 6.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    /// Track background
    pub const TRACK: Color32 = Color32::from_rgb(229, 231, 235);
    /// Value fill and preview (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Marked points (red)
    pub const MARKER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Major tick color
    pub const MAJOR_TICK: Color32 = Color32::from_rgb(107, 114, 128);
    /// Minor tick color
    pub const MINOR_TICK: Color32 = Color32::from_rgb(209, 213, 219);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
}
