//! Resolved-volume accounting.

use serde::Serialize;

/// Running sum of resolved volume against the volume of the active box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coverage {
    total_area: f64,
    current_area: f64,
}

impl Coverage {
    /// Nothing resolved yet out of `total_area`.
    #[must_use]
    pub fn new(total_area: f64) -> Self {
        Self {
            total_area,
            current_area: 0.0,
        }
    }

    /// Adds one resolved box's volume.
    pub fn accrue(&mut self, volume: f64) {
        self.current_area += volume;
    }

    /// Volume of the active box.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Volume resolved so far.
    #[must_use]
    pub fn current_area(&self) -> f64 {
        self.current_area
    }

    /// Percentage of the active box resolved so far.
    ///
    /// A box without volume has nothing left to resolve and reports 100.
    #[must_use]
    pub fn percent_finished(&self) -> f64 {
        if self.total_area > 0.0 {
            100.0 * self.current_area / self.total_area
        } else {
            100.0
        }
    }
}
