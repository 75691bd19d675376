//! Conventional scoresheet notation for ball and total cells.
//!
//! Read-only: nothing here mutates a [`Frame`].

use crate::{Ball, Frame, PIN_COUNT};

/// A cell on the scoresheet: one of the ball boxes, or the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallSlot {
    Total,
    Ball(Ball),
}

impl BallSlot {
    /// `0` for the total cell, otherwise the ball number.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            BallSlot::Total => 0,
            BallSlot::Ball(ball) => ball.number(),
        }
    }
}

impl From<Ball> for BallSlot {
    fn from(ball: Ball) -> Self {
        BallSlot::Ball(ball)
    }
}

/// Render one cell.
///
/// - ten on ball 1 is `X`; ten on ball 2 or 3 is `/`
/// - zero in a ball cell is `-` (a zero total stays `0`)
/// - an absent value is blank
/// - ball 2 completing exactly ten pins in the frame is `/`
#[must_use]
pub fn display_token(slot: BallSlot, value: Option<u16>, frame: &Frame) -> String {
    let index = slot.index();
    let strike = u16::from(PIN_COUNT);
    match value {
        Some(v) if v == strike && index == 1 => "X".to_string(),
        Some(v) if v == strike && index >= 2 => "/".to_string(),
        Some(0) if index != 0 => "-".to_string(),
        None => String::new(),
        Some(v) => {
            if frame.pin_total() == strike && index == 2 {
                return "/".to_string();
            }
            v.to_string()
        }
    }
}

/// Ball cells for a frame: two boxes, three for the last frame.
#[must_use]
pub fn ball_tokens(frame: &Frame) -> Vec<String> {
    let balls: &[Ball] = if frame.id().is_last() {
        &[Ball::First, Ball::Second, Ball::Third]
    } else {
        &[Ball::First, Ball::Second]
    };
    balls
        .iter()
        .map(|&ball| {
            let value = frame.ball(ball).map(|pins| u16::from(pins.get()));
            display_token(ball.into(), value, frame)
        })
        .collect()
}

#[must_use]
pub fn total_token(frame: &Frame) -> String {
    display_token(BallSlot::Total, frame.final_score(), frame)
}
