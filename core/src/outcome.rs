use serde::Serialize;

use bowlscore_types::{Ball, FrameId, Pins};

/// Which settlement rule fixed a frame's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The frame's own pins, once all its balls are in.
    Standard,
    /// Ten plus the next frame's first ball.
    PreviousFrameSpare,
    /// Ten plus both balls of the next frame.
    PreviousFrameStrike,
    /// Twenty plus the first ball two frames on.
    TwoStrikesInARow,
}

impl Rule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Standard => "standard",
            Rule::PreviousFrameSpare => "previous_frame_spare",
            Rule::PreviousFrameStrike => "previous_frame_strike",
            Rule::TwoStrikesInARow => "two_strikes_in_a_row",
        }
    }
}

/// A frame whose cumulative score was fixed by a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub frame: FrameId,
    pub rule: Rule,
    pub score: u16,
}

/// What an accepted roll did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    pub frame: FrameId,
    pub ball: Ball,
    pub pins: Pins,
    /// Settlements in the order they happened.
    pub settlements: Vec<Settlement>,
    pub game_over: bool,
}

impl RollOutcome {
    pub(crate) fn new(frame: FrameId, ball: Ball, pins: Pins) -> Self {
        Self {
            frame,
            ball,
            pins,
            settlements: Vec::with_capacity(2),
            game_over: false,
        }
    }

    #[must_use]
    pub fn settled(&self, frame: FrameId) -> Option<Settlement> {
        self.settlements.iter().copied().find(|s| s.frame == frame)
    }
}
