//! Game state for a single ten-frame game.

use serde::Serialize;

use bowlscore_types::{Ball, FRAME_COUNT, Frame, FrameId};

use crate::error::{ReplayError, RollError};
use crate::outcome::RollOutcome;
use crate::validator::{RollParser, pins_remaining, validate_roll};

/// Past-the-end frame index; reaching it ends the game.
pub(crate) const GAME_OVER_INDEX: u8 = FRAME_COUNT as u8 + 1;

/// The scoresheet and cursors for one game.
///
/// Created once with all ten frames empty and frame 1 current. Only accepted
/// rolls mutate it, and once the game is over every roll is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) frames: [Frame; FRAME_COUNT],
    /// 1..=10 while playing, 11 once the game has ended.
    pub(crate) current_frame_index: u8,
    pub(crate) current_ball: Ball,
    pub(crate) cumulative_score: u16,
    pub(crate) game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        let mut frames = Frame::blank_sheet();
        frames[FrameId::FIRST.index()].set_current(true);
        Self {
            frames,
            current_frame_index: FrameId::FIRST.get(),
            current_ball: Ball::First,
            cumulative_score: 0,
            game_over: false,
        }
    }

    /// Build a game by submitting `rolls` in order.
    pub fn replay<I>(rolls: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut game = Self::new();
        for (index, value) in rolls.into_iter().enumerate() {
            game.submit(value)
                .map_err(|source| ReplayError { index, source })?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    #[must_use]
    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.index()]
    }

    pub(crate) fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.index()]
    }

    #[must_use]
    pub fn current_frame_index(&self) -> u8 {
        self.current_frame_index
    }

    /// The frame taking rolls, or `None` once the game has ended.
    #[must_use]
    pub fn current_frame_id(&self) -> Option<FrameId> {
        FrameId::new(self.current_frame_index).ok()
    }

    #[must_use]
    pub fn current_frame(&self) -> Option<&Frame> {
        self.current_frame_id().map(|id| self.frame(id))
    }

    #[must_use]
    pub fn current_ball(&self) -> Ball {
        self.current_ball
    }

    /// Running total of every frame settled so far.
    #[must_use]
    pub fn cumulative_score(&self) -> u16 {
        self.cumulative_score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Pins standing for the next roll; zero once the game is over.
    #[must_use]
    pub fn pins_remaining(&self) -> u8 {
        if self.game_over {
            return 0;
        }
        self.current_frame().map_or(0, pins_remaining)
    }

    /// Parse `raw` with the default strike tokens and submit it.
    pub fn submit_roll(&mut self, raw: &str) -> Result<RollOutcome, RollError> {
        self.submit_with(&RollParser::default(), raw)
    }

    pub fn submit_with(&mut self, parser: &RollParser, raw: &str) -> Result<RollOutcome, RollError> {
        self.submit(parser.parse(raw))
    }

    /// Validate, record and settle one roll of `value` pins.
    ///
    /// On error nothing about the game changes.
    pub fn submit(&mut self, value: u32) -> Result<RollOutcome, RollError> {
        let frame_id = match self.current_frame_id() {
            Some(id) if !self.game_over => id,
            _ => {
                tracing::debug!(value, "Roll submitted after game over");
                return Err(RollError::GameOver);
            }
        };

        let pins = match validate_roll(value, self.frame(frame_id)) {
            Ok(pins) => pins,
            Err(err) => {
                tracing::debug!(frame = %frame_id, error = %err, "Roll rejected");
                return Err(err);
            }
        };

        let ball = self.current_ball;
        let mut outcome = RollOutcome::new(frame_id, ball, pins);
        let next = match ball {
            Ball::First => self.roll_first(frame_id, pins),
            Ball::Second => self.roll_second(frame_id, pins),
            Ball::Third => self.roll_third(frame_id, pins),
        };
        self.cascade(next, &mut outcome);

        outcome.game_over = self.game_over;
        Ok(outcome)
    }
}
