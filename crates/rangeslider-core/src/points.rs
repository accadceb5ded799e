//! Marked points along the slider track.

use crate::region::Domain;

/// Outcome of a toggle that changed the point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Toggle {
    /// A new point was marked at this value.
    Added(f64),
    /// An existing point within tolerance was removed.
    Removed(f64),
}

/// Ascending set of distinct marked values within a domain.
///
/// Every mutation goes through `add`/`remove`, so the set never holds a
/// duplicate or an out-of-domain value. Invalid operations are silent
/// no-ops; the returned `bool` only reports whether anything changed.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    domain: Domain,
    points: Vec<f64>,
}

impl PointSet {
    /// Create an empty point set.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            points: Vec::new(),
        }
    }

    /// Create a point set seeded from existing values.
    ///
    /// Seeds go through the same guard as `add`: duplicates and
    /// out-of-domain values are dropped.
    pub fn with_points(domain: Domain, points: impl IntoIterator<Item = f64>) -> Self {
        let mut set = Self::new(domain);
        for point in points {
            set.add(point);
        }
        set
    }

    /// Mark a point. No-op if it is outside the domain or already present.
    pub fn add(&mut self, point: f64) -> bool {
        if !self.domain.contains(point) {
            log::trace!("Ignoring point {} outside {:?}", point, self.domain);
            return false;
        }
        if self.contains(point) {
            log::trace!("Ignoring duplicate point {}", point);
            return false;
        }

        let index = self.points.partition_point(|p| *p < point);
        self.points.insert(index, point);
        log::debug!("Added point {}", point);
        true
    }

    /// Unmark an exact point. No-op if absent.
    pub fn remove(&mut self, point: f64) -> bool {
        match self.points.iter().position(|p| *p == point) {
            Some(index) => {
                self.points.remove(index);
                log::debug!("Removed point {}", point);
                true
            }
            None => false,
        }
    }

    /// Remove the smallest point within `tolerance` of `value`, or mark
    /// `value` itself if none is close enough.
    ///
    /// Returns `None` when nothing changed (`value` outside the domain).
    pub fn toggle_at(&mut self, value: f64, tolerance: f64) -> Option<Toggle> {
        // Points are ascending, so the first hit is the smallest match.
        let nearby = self
            .points
            .iter()
            .copied()
            .find(|p| (p - value).abs() <= tolerance);

        match nearby {
            Some(point) => self.remove(point).then_some(Toggle::Removed(point)),
            None => self.add(value).then_some(Toggle::Added(value)),
        }
    }

    /// Check if an exact point is marked.
    pub fn contains(&self, point: f64) -> bool {
        self.points.iter().any(|p| *p == point)
    }

    /// Number of marked points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points are marked.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }

    /// Points as an ascending slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }
}
