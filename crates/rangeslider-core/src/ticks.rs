//! Tick mark generation for the track scale.

use crate::config::SliderConfig;

/// Upper bound on generated ticks; denser scales are not drawn at all.
pub const MAX_TICKS: usize = 2000;

/// A tick mark on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Domain value at the tick.
    pub value: f64,
    /// Position along the track (0.0-1.0).
    pub fraction: f64,
    /// Major ticks are taller and carry a label.
    pub major: bool,
}

impl Tick {
    /// Label text for major ticks.
    pub fn label(&self) -> Option<String> {
        self.major.then(|| format_value(self.value))
    }
}

/// Format a domain value for display (no trailing `.0` on whole numbers).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Ticks every `minor_step` from `min` up to `max` inclusive.
///
/// A tick is major when its offset from `min` is a multiple of `major_step`.
pub fn ticks(config: &SliderConfig) -> Vec<Tick> {
    let domain = config.domain();
    if !(config.minor_step > 0.0) || !(domain.span() > 0.0) {
        return Vec::new();
    }

    let count = (domain.span() / config.minor_step).floor() + 1.0;
    if count > MAX_TICKS as f64 {
        log::warn!(
            "Skipping tick scale: minor step {} yields {} ticks (max {})",
            config.minor_step,
            count,
            MAX_TICKS
        );
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let mut index = 0.0;
    loop {
        // Multiply rather than accumulate to avoid drift.
        let value = domain.min + index * config.minor_step;
        if value > domain.max {
            break;
        }
        let major = config.major_step > 0.0 && (value - domain.min) % config.major_step == 0.0;
        ticks.push(Tick {
            value,
            fraction: domain.fraction_of(value),
            major,
        });
        index += 1.0;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ticks() {
        let ticks = ticks(&SliderConfig::default());
        // 100, 1100, ..., 19100
        assert_eq!(ticks.len(), 20);
        assert_eq!(ticks[0].value, 100.0);
        assert_eq!(ticks.last().map(|t| t.value), Some(19100.0));

        let majors: Vec<f64> = ticks.iter().filter(|t| t.major).map(|t| t.value).collect();
        assert_eq!(majors, vec![100.0, 5100.0, 10100.0, 15100.0]);
    }

    #[test]
    fn test_ticks_include_max() {
        let config = SliderConfig::new().with_range(0.0, 100.0).with_steps(50.0, 10.0);
        let ticks = ticks(&config);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[10].fraction, 1.0);
        assert!(ticks[10].major);
        assert!(!ticks[3].major);
    }

    #[test]
    fn test_tick_labels() {
        let config = SliderConfig::new().with_range(0.0, 100.0).with_steps(50.0, 10.0);
        let ticks = ticks(&config);
        assert_eq!(ticks[5].label().as_deref(), Some("50"));
        assert_eq!(ticks[4].label(), None);
    }

    #[test]
    fn test_invalid_step_yields_no_ticks() {
        let config = SliderConfig::new().with_steps(5000.0, 0.0);
        assert!(ticks(&config).is_empty());
    }

    #[test]
    fn test_dense_scale_is_skipped() {
        let config = SliderConfig::new().with_steps(5000.0, 1e-6);
        assert!(ticks(&config).is_empty());
    }

    #[test]
    fn test_scale_at_tick_limit_is_drawn() {
        // 0, 1, ..., 1999
        let config = SliderConfig::new().with_range(0.0, 1999.0).with_steps(500.0, 1.0);
        assert_eq!(ticks(&config).len(), MAX_TICKS);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5000.0), "5000");
        assert_eq!(format_value(12.5), "12.5");
    }
}
