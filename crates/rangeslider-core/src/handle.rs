//! Imperative point editing exposed to the slider's owner.

use crate::points::PointSet;

/// Facade over a slider's points that only allows adding and removing.
///
/// Both calls share the guards used by pointer-driven toggling, so adding
/// a duplicate or out-of-range point and removing an absent one are silent
/// no-ops here too.
#[derive(Debug)]
pub struct SliderHandle<'a> {
    points: &'a mut PointSet,
}

impl<'a> SliderHandle<'a> {
    pub(crate) fn new(points: &'a mut PointSet) -> Self {
        Self { points }
    }

    /// Mark a point.
    pub fn add_point(&mut self, point: f64) {
        self.points.add(point);
    }

    /// Unmark a point.
    pub fn remove_point(&mut self, point: f64) {
        self.points.remove(point);
    }
}
