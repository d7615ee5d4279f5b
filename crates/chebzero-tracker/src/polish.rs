//! Polishing mode state.
//!
//! A polishing round re-examines a queue of near-root boxes one at a time.
//! While it runs, coverage is measured against the active queued box and
//! nothing reaches the provenance registry.

use chebzero_core::{CheckError, CheckResult, Interval};

use crate::coverage::Coverage;

/// One polishing round in progress.
#[derive(Clone, Debug)]
pub struct PolishState {
    queue: Vec<Interval>,
    cursor: Option<usize>,
    saved: Coverage,
}

impl PolishState {
    /// Queues `queue`, remembering the coverage to restore afterwards.
    #[must_use]
    pub fn new(queue: Vec<Interval>, saved: Coverage) -> Self {
        Self {
            queue,
            cursor: None,
            saved,
        }
    }

    /// Moves to the next queued box and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::PolishExhausted`] once every queued box has
    /// been started.
    pub fn advance(&mut self) -> CheckResult<&Interval> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.queue.len() {
            return Err(CheckError::PolishExhausted(self.queue.len()));
        }
        self.cursor = Some(next);
        Ok(&self.queue[next])
    }

    /// The box being polished, if one has been started.
    #[must_use]
    pub fn active(&self) -> Option<&Interval> {
        self.cursor.map(|c| &self.queue[c])
    }

    /// Zero-based position of the active box.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of queued boxes.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Coverage of the normal-mode run the round interrupted.
    #[must_use]
    pub fn saved(&self) -> Coverage {
        self.saved
    }
}
