//! Routes a validated roll to the ball slot it fills.

use bowlscore_types::{Ball, FrameId, PIN_COUNT, Pins, pins_or_zero};

use crate::game::GameState;
use crate::resolution::{AfterStrike, Resolution, Step};

impl GameState {
    /// First ball of `frame`. A strike outside the last frame moves straight to
    /// the next frame.
    ///
    /// The lookback is anchored on `frame`, not on wherever the cursor ended up.
    pub(crate) fn roll_first(&mut self, frame: FrameId, pins: Pins) -> Option<Step> {
        self.frame_mut(frame).record(Ball::First, pins);
        if pins.is_strike() && !frame.is_last() {
            self.advance();
        } else {
            self.current_ball = Ball::Second;
        }

        let previous = self.frame(frame.previous()?);
        if previous.is_resolved() {
            return None;
        }
        if previous.is_strike() {
            let two_back_pending = previous
                .id()
                .previous()
                .is_some_and(|two_back| !self.frame(two_back).is_resolved());
            if two_back_pending {
                return Some(Step::Settle(Resolution::TwoStrikesInARow { frame }));
            }
        }
        if previous.is_spare() {
            return Some(Step::Settle(Resolution::PreviousFrameSpare { frame }));
        }
        None
    }

    pub(crate) fn roll_second(&mut self, frame: FrameId, pins: Pins) -> Option<Step> {
        let first = pins_or_zero(self.frame(frame).ball1());
        self.frame_mut(frame).record(Ball::Second, pins);

        let filled = first + u16::from(pins.get()) >= u16::from(PIN_COUNT);
        self.current_ball = if frame.is_last() && filled {
            Ball::Third
        } else {
            Ball::First
        };

        // Only a strike can still be open one frame back on the second ball.
        let previous_pending = frame
            .previous()
            .is_some_and(|previous| !self.frame(previous).is_resolved());

        if filled {
            if previous_pending {
                let after = if self.current_ball == Ball::Third {
                    AfterStrike::BonusPending
                } else {
                    AfterStrike::Spare
                };
                return Some(Step::Settle(Resolution::PreviousFrameStrike(after)));
            }
            if self.current_ball == Ball::Third {
                return None;
            }
            return Some(Step::Advance);
        }

        if previous_pending {
            return Some(Step::Settle(Resolution::PreviousFrameStrike(
                AfterStrike::Score,
            )));
        }
        Some(Step::Settle(Resolution::Standard))
    }

    /// Bonus ball of the last frame; always completes it.
    pub(crate) fn roll_third(&mut self, frame: FrameId, pins: Pins) -> Option<Step> {
        self.frame_mut(frame).record(Ball::Third, pins);
        Some(Step::Settle(Resolution::Standard))
    }
}
