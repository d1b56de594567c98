// SPDX-License-Identifier: MPL-2.0
//! Result-gallery component: decorates the analysis result cards with
//! presentation affordances and hosts the lightbox modal.
//!
//! The card list is pre-built by the submission handover; this component
//! never recomputes analysis data. It owns three decorations — pulsing
//! high-confidence badges, hover lift, staggered scroll reveal — plus the
//! lightbox.

pub mod modal;
pub mod reveal;
mod view;

pub use view::{modal_overlay, view};

use crate::media::{AnalysisRecord, ResultSet};
use std::time::{Duration, Instant};

/// Confidence percentage at which a badge starts pulsing.
pub const PULSE_THRESHOLD: u8 = 80;

/// Period of one pulse oscillation.
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Peak scale of the pulse oscillation.
pub const PULSE_MAX_SCALE: f32 = 1.1;

/// Vertical lift applied to a hovered card, in logical pixels.
pub const HOVER_LIFT: f32 = -8.0;

/// Scale applied to a hovered card.
pub const HOVER_SCALE: f32 = 1.02;

/// Interval of the animation tick driving pulse and reveal timing.
pub const ANIMATION_TICK: Duration = Duration::from_millis(100);

/// Estimated height of one card row, used for viewport visibility math.
pub const CARD_ROW_HEIGHT: f32 = 330.0;

/// Whether a confidence value earns the pulsing emphasis.
#[must_use]
pub fn emphasized(confidence: Option<u8>) -> bool {
    confidence.is_some_and(|value| value >= PULSE_THRESHOLD)
}

/// Messages consumed by the gallery component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered a card.
    CardHovered(usize),
    /// Pointer left a card.
    CardUnhovered(usize),
    /// A card image was clicked; open the lightbox.
    CardClicked(usize),
    /// The card list was scrolled.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    /// Animation heartbeat for pulse and reveal timing.
    AnimationTick,
    /// Return to the intake screen.
    BackRequested,
    /// Lightbox messages.
    Modal(modal::Message),
}

/// Effects the gallery asks the application to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Switch back to the intake screen.
    BackToIntake,
}

/// Result-gallery state.
#[derive(Debug)]
pub struct State {
    records: Vec<AnalysisRecord>,
    hovered: Option<usize>,
    reveal: reveal::State,
    modal: modal::State,
    /// Pulse oscillation phase in `[0, 1)`.
    pulse_phase: f32,
    /// Decorative animations toggle from `[display] animations`.
    animations: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}

impl State {
    #[must_use]
    pub fn new(animations: bool) -> Self {
        Self {
            records: Vec::new(),
            hovered: None,
            reveal: reveal::State::new(),
            modal: modal::State::new(),
            pulse_phase: 0.0,
            animations,
        }
    }

    /// Replaces the card list with a fresh result set and schedules the
    /// initial reveal batch for the cards already in view.
    pub fn load(&mut self, set: &ResultSet, viewport_height: f32) {
        self.records = set.records().to_vec();
        self.hovered = None;
        self.modal = modal::State::new();
        self.reveal.reset();

        if self.animations {
            let initial = visible_range(0.0, viewport_height, self.records.len());
            self.reveal.observe_visible(&initial, Instant::now());
        } else {
            self.reveal.reveal_all(self.records.len());
        }
    }

    /// Handle a gallery message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::CardHovered(index) => {
                self.hovered = Some(index);
                Effect::None
            }
            Message::CardUnhovered(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Effect::None
            }
            Message::CardClicked(index) => {
                if let Some(record) = self.records.get(index) {
                    self.modal.handle(modal::Message::Open {
                        image: record.image.clone(),
                        caption: record.title.clone(),
                    });
                }
                Effect::None
            }
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => {
                if self.animations {
                    let batch = visible_range(offset_y, viewport_height, self.records.len());
                    self.reveal.observe_visible(&batch, Instant::now());
                }
                Effect::None
            }
            Message::AnimationTick => {
                self.advance_pulse();
                self.reveal.tick(Instant::now());
                Effect::None
            }
            Message::BackRequested => Effect::BackToIntake,
            Message::Modal(msg) => {
                self.modal.handle(msg);
                Effect::None
            }
        }
    }

    fn advance_pulse(&mut self) {
        if !self.animations {
            return;
        }
        self.pulse_phase += ANIMATION_TICK.as_secs_f32() / PULSE_PERIOD.as_secs_f32();
        if self.pulse_phase >= 1.0 {
            self.pulse_phase -= 1.0;
        }
    }

    /// Current scale of pulsing badges: oscillates `1.0 → 1.1 → 1.0` over
    /// one period. Badges below the threshold always render at 1.0.
    #[must_use]
    pub fn pulse_scale(&self) -> f32 {
        if !self.animations {
            return 1.0;
        }
        1.0 + (PULSE_MAX_SCALE - 1.0) * (std::f32::consts::PI * self.pulse_phase).sin()
    }

    /// Whether the badge of `index` pulses.
    #[must_use]
    pub fn card_pulses(&self, index: usize) -> bool {
        self.animations
            && self
                .records
                .get(index)
                .is_some_and(|record| emphasized(record.confidence))
    }

    /// The transform of a card: `(translate_y, scale)`. Hovered cards lift
    /// and slightly enlarge; everything else rests at identity.
    #[must_use]
    pub fn card_transform(&self, index: usize) -> (f32, f32) {
        if self.hovered == Some(index) {
            (HOVER_LIFT, HOVER_SCALE)
        } else {
            (0.0, 1.0)
        }
    }

    /// Whether the animation tick subscription should be running.
    #[must_use]
    pub fn has_animation_work(&self) -> bool {
        if !self.animations {
            return false;
        }
        self.reveal.has_pending()
            || self
                .records
                .iter()
                .any(|record| emphasized(record.confidence))
    }

    #[must_use]
    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_revealed(index)
    }

    #[must_use]
    pub fn modal(&self) -> &modal::State {
        &self.modal
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }
}

/// Indices of the card rows intersecting the viewport.
fn visible_range(offset_y: f32, viewport_height: f32, count: usize) -> Vec<usize> {
    let mut visible = Vec::new();
    for index in 0..count {
        let top = index as f32 * CARD_ROW_HEIGHT;
        let bottom = top + CARD_ROW_HEIGHT;
        if bottom > offset_y && top < offset_y + viewport_height {
            visible.push(index);
        }
    }
    visible
}
