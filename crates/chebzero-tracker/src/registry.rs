//! Provenance: which check or terminal outcome resolved which box.

use std::fmt;

use chebzero_checks::{IntervalCheck, SubintervalCheck};
use chebzero_core::Interval;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

use crate::config::TrackerConfig;

/// What resolved a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Eliminated by a whole-box check.
    Interval(IntervalCheck),
    /// Eliminated by a batch check.
    Subinterval(SubintervalCheck),
    /// Small enough to be handed to the base-case solver.
    BaseCase,
    /// Resolved by the Macaulay fallback.
    Macaulay,
    /// Abandoned at the recursion depth limit.
    TooDeep,
}

impl Resolution {
    /// The three outcomes decided by the driver rather than by a check.
    pub const TERMINAL: [Resolution; 3] = [
        Resolution::BaseCase,
        Resolution::Macaulay,
        Resolution::TooDeep,
    ];

    /// Report name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resolution::Interval(check) => check.name(),
            Resolution::Subinterval(check) => check.name(),
            Resolution::BaseCase => "Base Case",
            Resolution::Macaulay => "Macaulay",
            Resolution::TooDeep => "Too Deep",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Ordered record of resolved boxes per [`Resolution`].
///
/// Slots keep their creation order: configured interval checks, configured
/// subinterval checks, then the terminal outcomes.
#[derive(Clone, Debug, Default)]
pub struct ProvenanceRegistry {
    slots: Vec<(Resolution, Vec<Interval>)>,
    index: FxHashMap<Resolution, usize>,
}

impl ProvenanceRegistry {
    /// An empty registry with one slot per check of `config` and per
    /// terminal outcome.
    #[must_use]
    pub fn for_config(config: &TrackerConfig) -> Self {
        let mut registry = Self::default();
        let resolutions = config
            .interval_checks
            .iter()
            .map(|&check| Resolution::Interval(check))
            .chain(
                config
                    .subinterval_checks
                    .iter()
                    .map(|&check| Resolution::Subinterval(check)),
            )
            .chain(Resolution::TERMINAL);
        for resolution in resolutions {
            registry.slot_mut(resolution);
        }
        registry
    }

    fn slot_mut(&mut self, resolution: Resolution) -> &mut Vec<Interval> {
        let next = self.slots.len();
        let position = *self.index.entry(resolution).or_insert(next);
        if position == next {
            self.slots.push((resolution, Vec::new()));
        }
        &mut self.slots[position].1
    }

    /// Appends `interval` under `resolution`, opening a slot if needed.
    pub fn record(&mut self, resolution: Resolution, interval: Interval) {
        self.slot_mut(resolution).push(interval);
    }

    /// Boxes recorded under `resolution`, in recording order.
    #[must_use]
    pub fn get(&self, resolution: Resolution) -> &[Interval] {
        match self.index.get(&resolution) {
            Some(&position) => self.slots[position].1.as_slice(),
            None => &[],
        }
    }

    /// Slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (Resolution, &[Interval])> + '_ {
        self.slots
            .iter()
            .map(|(resolution, boxes)| (*resolution, boxes.as_slice()))
    }

    /// Number of recorded boxes across all slots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.iter().map(|(_, boxes)| boxes.len()).sum()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
