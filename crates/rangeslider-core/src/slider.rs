//! The range slider component: current value, hover state and points.

use crate::config::{ConfigResult, SliderConfig};
use crate::handle::SliderHandle;
use crate::input::{SliderEvent, SliderResponse};
use crate::mapper::ValueMapper;
use crate::points::{PointSet, Toggle};
use crate::region::Region;

/// A single range slider instance.
///
/// Configuration is fixed at construction. The current value is derived
/// from scratch on every pointer move; points change only through the
/// guarded `PointSet` operations, whether driven by gestures or by the
/// imperative handle.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    config: SliderConfig,
    value: f64,
    hovered: bool,
    pointer_fraction: f64,
    points: PointSet,
}

impl RangeSlider {
    /// Create a slider, rejecting an invalid configuration.
    pub fn new(config: SliderConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::new_unchecked(config))
    }

    /// Create a slider without validating the configuration.
    ///
    /// The caller guarantees `min < max`, a positive increment, a
    /// non-negative tolerance and well-formed regions.
    pub fn new_unchecked(config: SliderConfig) -> Self {
        let domain = config.domain();
        Self {
            value: config.min,
            hovered: false,
            pointer_fraction: 0.0,
            points: PointSet::new(domain),
            config,
        }
    }

    /// Seed the slider with existing points.
    pub fn with_points(mut self, points: impl IntoIterator<Item = f64>) -> Self {
        for point in points {
            self.points.add(point);
        }
        self
    }

    /// The slider configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Value mapper over this slider's configuration.
    pub fn mapper(&self) -> ValueMapper<'_> {
        ValueMapper::new(&self.config)
    }

    /// Current snapped value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Region governing the current value.
    pub fn region(&self) -> Option<&Region> {
        self.mapper().region_for(self.value)
    }

    /// Marked points.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Whether the pointer is over the track.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Last pointer position as a fraction of the track.
    pub fn pointer_fraction(&self) -> f64 {
        self.pointer_fraction
    }

    /// Imperative add/remove surface for the slider's owner.
    pub fn handle(&mut self) -> SliderHandle<'_> {
        SliderHandle::new(&mut self.points)
    }

    /// Activate hover/focus. Returns true if the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        self.set_hovered(true)
    }

    /// Deactivate hover/focus. Returns true if the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.set_hovered(false)
    }

    fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        log::debug!("Slider hover {}", if hovered { "entered" } else { "left" });
        self.hovered = hovered;
        true
    }

    /// Recompute the current value from a pointer position.
    ///
    /// Returns true if the value changed.
    pub fn pointer_move(&mut self, fraction: f64) -> bool {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let value = self.mapper().map_fraction(fraction);
        log::trace!("Pointer at {:.4} -> {}", fraction, value);

        self.pointer_fraction = fraction;
        let changed = value != self.value;
        self.value = value;
        changed
    }

    /// Toggle a point at the current value. No-op unless hovered.
    pub fn activate(&mut self) -> Option<Toggle> {
        if !self.hovered {
            log::trace!("Ignoring activation while not hovered");
            return None;
        }
        let toggle = self.points.toggle_at(self.value, self.config.tolerance);
        log::debug!("Toggle at {}: {:?}", self.value, toggle);
        toggle
    }

    /// Remove a specific point, bypassing tolerance matching.
    pub fn dismiss_point(&mut self, point: f64) -> bool {
        self.points.remove(point)
    }

    /// Dispatch a gesture event.
    pub fn handle_event(&mut self, event: SliderEvent) -> SliderResponse {
        let mut response = SliderResponse::default();
        match event {
            SliderEvent::PointerEnter => response.hover_changed = self.pointer_enter(),
            SliderEvent::PointerLeave => response.hover_changed = self.pointer_leave(),
            SliderEvent::PointerMove { fraction } => {
                response.value_changed = self.pointer_move(fraction)
            }
            SliderEvent::Activate => response.points_changed = self.activate().is_some(),
            SliderEvent::DismissPoint { point } => {
                response.points_changed = self.dismiss_point(point)
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn sample_config() -> SliderConfig {
        SliderConfig::new()
            .with_range(100.0, 20000.0)
            .with_increment(25)
            .with_regions(vec![
                Region::new(1000.0, 4000.0, "R1"),
                Region::new(4000.0, 7000.0, "R2"),
                Region::new(7000.0, 20000.0, "R3"),
            ])
    }

    fn fraction_for(raw: f64) -> f64 {
        (raw - 100.0) / (20000.0 - 100.0)
    }

    fn assert_sorted_unique(slider: &RangeSlider) {
        let points = slider.points().as_slice();
        assert!(
            points.windows(2).all(|w| w[0] < w[1]),
            "points not strictly ascending: {points:?}"
        );
    }

    #[test]
    fn test_new_starts_at_min() {
        let slider = RangeSlider::new(SliderConfig::default()).unwrap();
        assert_eq!(slider.value(), 100.0);
        assert!(!slider.is_hovered());
        assert!(slider.points().is_empty());
        assert_eq!(slider.pointer_fraction(), 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = RangeSlider::new(SliderConfig::new().with_range(10.0, 5.0));
        assert!(matches!(result, Err(ConfigError::InvalidDomain { .. })));
    }

    #[test]
    fn test_pointer_move_snaps_into_first_region_at_boundary() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.pointer_move(fraction_for(3990.0));
        assert_eq!(slider.value(), 4000.0);
        assert_eq!(slider.region().map(|r| r.color.as_str()), Some("R1"));
    }

    #[test]
    fn test_pointer_move_outside_regions() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.pointer_move(fraction_for(512.0));
        assert_eq!(slider.value(), 500.0);
        assert!(slider.region().is_none());
    }

    #[test]
    fn test_pointer_move_is_last_event_wins() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.pointer_move(0.9);
        slider.pointer_move(0.1);
        let mut fresh = RangeSlider::new(sample_config()).unwrap();
        fresh.pointer_move(0.1);
        assert_eq!(slider.value(), fresh.value());
        assert_eq!(slider.pointer_fraction(), 0.1);
    }

    #[test]
    fn test_pointer_move_clamps_fraction() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.pointer_move(1.7);
        assert_eq!(slider.value(), 20000.0);
        assert_eq!(slider.pointer_fraction(), 1.0);
        slider.pointer_move(f64::NAN);
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn test_activate_requires_hover() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.pointer_move(0.5);
        assert_eq!(slider.activate(), None);
        assert!(slider.points().is_empty());
    }

    #[test]
    fn test_activate_toggles_point() {
        let mut slider = RangeSlider::new(sample_config().with_tolerance(20.0)).unwrap();
        slider.pointer_enter();
        slider.pointer_move(fraction_for(5000.0));
        assert_eq!(slider.activate(), Some(Toggle::Added(5000.0)));
        assert_eq!(slider.activate(), Some(Toggle::Removed(5000.0)));
        assert!(slider.points().is_empty());
    }

    #[test]
    fn test_activate_removes_nearby_point() {
        let mut slider =
            RangeSlider::new(sample_config().with_tolerance(20.0)).unwrap().with_points([5010.0]);
        slider.pointer_enter();
        slider.pointer_move(fraction_for(5000.0));
        assert_eq!(slider.activate(), Some(Toggle::Removed(5010.0)));
    }

    #[test]
    fn test_activate_after_leave_is_noop() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.pointer_enter();
        slider.pointer_move(0.5);
        slider.pointer_leave();
        assert_eq!(slider.activate(), None);
        assert!(slider.points().is_empty());
    }

    #[test]
    fn test_dismiss_bypasses_tolerance() {
        let mut slider = RangeSlider::new(sample_config()).unwrap().with_points([5000.0, 5010.0]);
        assert!(slider.dismiss_point(5010.0));
        assert!(!slider.dismiss_point(5005.0));
        assert_eq!(slider.points().as_slice(), &[5000.0]);
    }

    #[test]
    fn test_handle_shares_guards() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();
        slider.handle().add_point(5000.0);
        slider.handle().add_point(5000.0);
        slider.handle().add_point(50.0);
        assert_eq!(slider.points().as_slice(), &[5000.0]);

        slider.pointer_enter();
        slider.pointer_move(fraction_for(5000.0));
        assert_eq!(slider.activate(), Some(Toggle::Removed(5000.0)));

        slider.handle().remove_point(5000.0);
        assert!(slider.points().is_empty());
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut slider = RangeSlider::new(sample_config()).unwrap();

        let response = slider.handle_event(SliderEvent::Activate);
        assert!(!response.changed());

        let response = slider.handle_event(SliderEvent::PointerEnter);
        assert!(response.hover_changed);
        assert!(!slider.handle_event(SliderEvent::PointerEnter).changed());

        let response = slider.handle_event(SliderEvent::PointerMove {
            fraction: fraction_for(8000.0),
        });
        assert!(response.value_changed);
        assert_eq!(slider.value(), 8000.0);

        let response = slider.handle_event(SliderEvent::Activate);
        assert!(response.points_changed);
        assert_eq!(slider.points().as_slice(), &[8000.0]);

        let response = slider.handle_event(SliderEvent::DismissPoint { point: 8000.0 });
        assert!(response.points_changed);
        assert!(slider.points().is_empty());

        let response = slider.handle_event(SliderEvent::DismissPoint { point: 8000.0 });
        assert!(!response.changed());
    }

    #[test]
    fn test_scripted_operations_keep_points_sorted_and_unique() {
        let mut slider =
            RangeSlider::new(sample_config().with_tolerance(100.0)).unwrap().with_points([9000.0]);
        slider.pointer_enter();

        let fractions = [0.5, 0.1, 0.9, 0.5, 0.25, 0.75, 0.1, 0.33, 0.66, 0.0, 1.0];
        for (i, fraction) in fractions.iter().enumerate() {
            slider.pointer_move(*fraction);
            slider.activate();
            assert_sorted_unique(&slider);

            let value = slider.value();
            slider.handle().add_point(value + (i as f64) * 300.0);
            assert_sorted_unique(&slider);

            if i % 3 == 0 {
                slider.handle().remove_point(9000.0);
                slider.dismiss_point(value);
                assert_sorted_unique(&slider);
            }
        }
    }

    #[test]
    fn test_parent_driven_add_and_remove() {
        let config = sample_config().with_tolerance(45.0);
        let mut slider = RangeSlider::new(config).unwrap();

        slider.handle().add_point(5000.0);
        assert!(slider.points().contains(5000.0));

        // Hovering near the externally added point and clicking unmarks it.
        slider.pointer_enter();
        slider.pointer_move(fraction_for(5030.0));
        assert_eq!(slider.value(), 5025.0);
        assert_eq!(slider.activate(), Some(Toggle::Removed(5000.0)));

        slider.handle().add_point(5000.0);
        slider.handle().remove_point(5000.0);
        assert!(slider.points().is_empty());
    }
}
