//! The per-frame scoring record.

use serde::Serialize;

use crate::{Ball, FRAME_COUNT, FrameId, PIN_COUNT, Pins, pins_or_zero};

/// One of the ten frames on a scoresheet.
///
/// Balls stay `None` until rolled. `final_score` is the running total through
/// this frame and is written at most once; [`Frame::settle`] refuses to
/// overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    id: FrameId,
    ball1: Option<Pins>,
    ball2: Option<Pins>,
    ball3: Option<Pins>,
    final_score: Option<u16>,
    is_current: bool,
}

impl Frame {
    #[must_use]
    pub const fn new(id: FrameId) -> Self {
        Self {
            id,
            ball1: None,
            ball2: None,
            ball3: None,
            final_score: None,
            is_current: false,
        }
    }

    /// Ten empty frames, ids 1 through 10 in order.
    #[must_use]
    pub fn blank_sheet() -> [Frame; FRAME_COUNT] {
        std::array::from_fn(|index| Frame::new(FrameId(index as u8 + 1)))
    }

    #[must_use]
    pub const fn id(&self) -> FrameId {
        self.id
    }

    #[must_use]
    pub const fn ball1(&self) -> Option<Pins> {
        self.ball1
    }

    #[must_use]
    pub const fn ball2(&self) -> Option<Pins> {
        self.ball2
    }

    /// Bonus ball; only ever set in the tenth frame.
    #[must_use]
    pub const fn ball3(&self) -> Option<Pins> {
        self.ball3
    }

    #[must_use]
    pub const fn ball(&self, ball: Ball) -> Option<Pins> {
        match ball {
            Ball::First => self.ball1,
            Ball::Second => self.ball2,
            Ball::Third => self.ball3,
        }
    }

    /// Cumulative score through this frame, once it can be known.
    #[must_use]
    pub const fn final_score(&self) -> Option<u16> {
        self.final_score
    }

    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.is_current
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.final_score.is_some()
    }

    /// Pins credited by this frame's own rolls, bonuses excluded.
    #[must_use]
    pub fn pin_total(&self) -> u16 {
        pins_or_zero(self.ball1) + pins_or_zero(self.ball2) + pins_or_zero(self.ball3)
    }

    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.ball1.is_some_and(Pins::is_strike)
    }

    #[must_use]
    pub fn is_spare(&self) -> bool {
        match (self.ball1, self.ball2) {
            (Some(first), Some(second)) => {
                !first.is_strike() && first.get() + second.get() == PIN_COUNT
            }
            _ => false,
        }
    }

    /// Write a roll into its slot.
    pub fn record(&mut self, ball: Ball, pins: Pins) {
        debug_assert!(
            ball != Ball::Third || self.id.is_last(),
            "bonus ball recorded outside the last frame"
        );
        match ball {
            Ball::First => self.ball1 = Some(pins),
            Ball::Second => self.ball2 = Some(pins),
            Ball::Third => self.ball3 = Some(pins),
        }
    }

    /// Fix the cumulative score. Returns `false` and leaves the frame
    /// untouched if it was already settled.
    pub fn settle(&mut self, cumulative: u16) -> bool {
        if self.final_score.is_some() {
            return false;
        }
        self.final_score = Some(cumulative);
        true
    }

    pub fn set_current(&mut self, current: bool) {
        self.is_current = current;
    }
}
