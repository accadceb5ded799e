//! Gesture events delivered to a slider by an input layer.

use serde::{Deserialize, Serialize};

/// A user gesture targeting the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// Pointer entered the track; activates hover/focus.
    PointerEnter,
    /// Pointer left the track; deactivates hover/focus.
    PointerLeave,
    /// Pointer moved to a normalized position along the track.
    PointerMove { fraction: f64 },
    /// Primary activation (click) on the track.
    Activate,
    /// Direct dismissal of a specific marked point (e.g. clicking its label).
    DismissPoint { point: f64 },
}

/// What changed in response to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderResponse {
    pub value_changed: bool,
    pub points_changed: bool,
    pub hover_changed: bool,
}

impl SliderResponse {
    /// Check if the display needs refreshing.
    pub fn changed(&self) -> bool {
        self.value_changed || self.points_changed || self.hover_changed
    }
}

/// Convert a pointer x coordinate into a fraction of the track width.
///
/// The result is clamped to `[0, 1]`. A degenerate track maps to 0.
pub fn fraction_from_position(x: f64, left: f64, width: f64) -> f64 {
    if !(width > 0.0) {
        return 0.0;
    }
    ((x - left) / width).clamp(0.0, 1.0)
}
