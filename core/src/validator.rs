//! Roll entry: token parsing and the pins-standing gate.
//!
//! Validation runs before any frame is touched, so a rejected roll leaves the
//! game unchanged.

use bowlscore_types::{Frame, PIN_COUNT, Pins, pins_or_zero};

use crate::error::RollError;

const DEFAULT_STRIKE_TOKENS: [&str; 2] = ["X", "x"];

/// Pins standing for the next roll in `frame`.
///
/// The last frame resets the rack after a strike or spare so the bonus balls
/// can be thrown.
#[must_use]
pub fn pins_remaining(frame: &Frame) -> u8 {
    let ball1 = pins_or_zero(frame.ball1());
    let ball2 = pins_or_zero(frame.ball2());
    let rack = u16::from(PIN_COUNT);

    if frame.id().is_last() && (ball1 == rack || ball2 == rack || ball1 + ball2 >= rack) {
        return PIN_COUNT;
    }
    rack.saturating_sub(ball1 + ball2) as u8
}

/// Accept `value` for the next roll in `frame`, or reject it if it exceeds
/// the pins standing.
pub fn validate_roll(value: u32, frame: &Frame) -> Result<Pins, RollError> {
    let remaining = pins_remaining(frame);
    let invalid = RollError::InvalidEntry {
        entered: value,
        remaining,
    };
    if value > u32::from(remaining) {
        return Err(invalid);
    }
    u8::try_from(value)
        .ok()
        .and_then(|pins| Pins::new(pins).ok())
        .ok_or(invalid)
}

/// Turns keypad or command-line text into a pin count.
///
/// Parsing never fails: a strike token is ten, and empty or unreadable input
/// is a gutter ball. Range checks belong to [`validate_roll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollParser {
    strike_tokens: Vec<String>,
}

impl Default for RollParser {
    fn default() -> Self {
        Self::new(DEFAULT_STRIKE_TOKENS)
    }
}

impl RollParser {
    pub fn new<I, S>(strike_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strike_tokens: strike_tokens
                .into_iter()
                .map(Into::into)
                .map(|token: String| token.trim().to_string())
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn strike_tokens(&self) -> &[String] {
        &self.strike_tokens
    }

    #[must_use]
    pub fn is_strike_token(&self, raw: &str) -> bool {
        let token = raw.trim();
        self.strike_tokens.iter().any(|strike| strike == token)
    }

    #[must_use]
    pub fn parse(&self, raw: &str) -> u32 {
        let token = raw.trim();
        if token.is_empty() {
            return 0;
        }
        if self.is_strike_token(token) {
            return u32::from(PIN_COUNT);
        }
        token.parse().unwrap_or(0)
    }
}
