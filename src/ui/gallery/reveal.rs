// SPDX-License-Identifier: MPL-2.0
//! Staggered entrance reveal for result cards.
//!
//! Cards start hidden. The first time a card becomes visible in the
//! viewport it is scheduled to reveal after a delay proportional to its
//! position among the cards that became visible in the same observation
//! batch. A card reveals at most once; leaving the viewport never hides
//! it again.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Delay step between consecutive cards of one observation batch.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Reveal scheduling state.
#[derive(Debug, Default)]
pub struct State {
    /// Cards scheduled to reveal, with their due time.
    pending: HashMap<usize, Instant>,
    /// Cards that have revealed. Never shrinks.
    revealed: HashSet<usize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an observation batch: every index that is neither revealed
    /// nor already scheduled gets a due time staggered by its position in
    /// the batch.
    pub fn observe_visible(&mut self, visible: &[usize], now: Instant) {
        let mut batch_position: u32 = 0;
        for &index in visible {
            if self.revealed.contains(&index) || self.pending.contains_key(&index) {
                continue;
            }
            let due = now + STAGGER_STEP * batch_position;
            self.pending.insert(index, due);
            batch_position += 1;
        }
    }

    /// Promotes due cards to revealed.
    pub fn tick(&mut self, now: Instant) {
        let due: Vec<usize> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(index, _)| *index)
            .collect();

        for index in due {
            self.pending.remove(&index);
            self.revealed.insert(index);
        }
    }

    /// Reveals everything immediately (reduced-motion path).
    pub fn reveal_all(&mut self, count: usize) {
        self.pending.clear();
        self.revealed.extend(0..count);
    }

    /// Forgets all scheduling (new result set loaded).
    pub fn reset(&mut self) {
        self.pending.clear();
        self.revealed.clear();
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Whether the animation tick still has work to do.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
