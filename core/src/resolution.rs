//! Deferred frame settlement.
//!
//! Strikes and spares cannot be scored until later rolls are known, so each
//! roll may settle an earlier frame. Settlement is driven by a short work-list:
//! the dispatcher hands over at most one [`Step`], and a rule may hand back one
//! follow-up. The longest chain is a pending strike settled on ball two,
//! followed by the standard settlement of the open frame that completed it,
//! followed by the frame advance.

use bowlscore_types::{FrameId, PIN_COUNT, pins_or_zero};

use crate::game::GameState;
use crate::outcome::{RollOutcome, Rule, Settlement};

/// Settlement rules run per roll never exceed this.
const MAX_SETTLEMENT_STEPS: usize = 2;

/// What the engine does next after a roll is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Advance,
    Settle(Resolution),
}

/// How the previous frame's strike is followed up once it is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AfterStrike {
    /// Current frame is open: settle it right away.
    Score,
    /// Current frame is a spare: move on and wait for the next ball.
    Spare,
    /// Last frame earned a bonus ball: wait for it.
    BonusPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    Standard,
    /// `frame` is the frame whose first ball was just rolled.
    PreviousFrameSpare { frame: FrameId },
    PreviousFrameStrike(AfterStrike),
    /// `frame` is the frame whose first ball was just rolled.
    TwoStrikesInARow { frame: FrameId },
}

impl GameState {
    pub(crate) fn cascade(&mut self, first: Option<Step>, outcome: &mut RollOutcome) {
        let mut pending = first;
        let mut settled_steps = 0;

        while let Some(step) = pending.take() {
            pending = match step {
                Step::Advance => {
                    self.advance();
                    None
                }
                Step::Settle(resolution) => {
                    settled_steps += 1;
                    debug_assert!(
                        settled_steps <= MAX_SETTLEMENT_STEPS,
                        "settlement cascade ran {settled_steps} steps"
                    );
                    self.resolve(resolution, outcome)
                }
            };
        }
    }

    fn resolve(&mut self, resolution: Resolution, outcome: &mut RollOutcome) -> Option<Step> {
        let rack = u16::from(PIN_COUNT);
        match resolution {
            Resolution::Standard => {
                let current = self.current_frame_id()?;
                let pins = self.frame(current).pin_total();
                self.settle(current, Rule::Standard, pins, outcome);
                Some(Step::Advance)
            }
            Resolution::PreviousFrameSpare { frame } => {
                let previous = frame.previous()?;
                let bonus = pins_or_zero(self.frame(frame).ball1());
                self.settle(previous, Rule::PreviousFrameSpare, rack + bonus, outcome);
                None
            }
            Resolution::PreviousFrameStrike(after) => {
                let current = self.current_frame_id()?;
                let previous = current.previous()?;
                let this = self.frame(current);
                let bonus = pins_or_zero(this.ball1()) + pins_or_zero(this.ball2());
                self.settle(previous, Rule::PreviousFrameStrike, rack + bonus, outcome);
                match after {
                    AfterStrike::Score => Some(Step::Settle(Resolution::Standard)),
                    AfterStrike::Spare => Some(Step::Advance),
                    AfterStrike::BonusPending => None,
                }
            }
            Resolution::TwoStrikesInARow { frame } => {
                let two_back = frame.previous()?.previous()?;
                let bonus = pins_or_zero(self.frame(frame).ball1());
                self.settle(two_back, Rule::TwoStrikesInARow, 2 * rack + bonus, outcome);
                None
            }
        }
    }

    /// Fix `frame` at the running total plus `credit`. A frame that already
    /// has a score is left alone and the running total does not move.
    fn settle(&mut self, frame: FrameId, rule: Rule, credit: u16, outcome: &mut RollOutcome) {
        let score = self.cumulative_score + credit;
        if !self.frame_mut(frame).settle(score) {
            tracing::debug!(%frame, rule = rule.as_str(), "Frame already settled; skipping");
            return;
        }
        self.cumulative_score = score;
        outcome.settlements.push(Settlement { frame, rule, score });
        tracing::debug!(%frame, rule = rule.as_str(), score, "Frame settled");
    }
}
