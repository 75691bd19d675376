//! Core domain types for BowlScore.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod frame;
pub mod notation;

pub use frame::Frame;
pub use notation::{BallSlot, ball_tokens, display_token, total_token};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pins standing on a fresh rack.
pub const PIN_COUNT: u8 = 10;

/// Frames in one game.
pub const FRAME_COUNT: usize = 10;

// ============================================================================
// Pin Counts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pin count {0} exceeds the 10 pins on a rack")]
pub struct PinsError(pub u8);

/// Pins knocked down by a single roll.
///
/// # Invariants
///
/// - Always in `0..=10`
///
/// # Serde
///
/// Serializes as a bare integer. Deserialization rejects values above 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pins(u8);

impl Pins {
    pub const ZERO: Pins = Pins(0);
    pub const ALL: Pins = Pins(PIN_COUNT);

    pub fn new(value: u8) -> Result<Self, PinsError> {
        if value > PIN_COUNT {
            return Err(PinsError(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.0 == PIN_COUNT
    }
}

impl TryFrom<u8> for Pins {
    type Error = PinsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pins> for u8 {
    fn from(value: Pins) -> Self {
        value.0
    }
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A roll that has not happened yet counts as zero pins in arithmetic.
///
/// Keeping this explicit lets display code tell "not rolled" apart from
/// "rolled a gutter ball" while scoring treats them the same.
#[inline]
#[must_use]
pub fn pins_or_zero(ball: Option<Pins>) -> u16 {
    ball.map_or(0, |pins| u16::from(pins.get()))
}

// ============================================================================
// Frame Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame {0} is outside 1..=10")]
pub struct FrameIdError(pub u8);

/// Frame number, 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FrameId(u8);

impl FrameId {
    pub const FIRST: FrameId = FrameId(1);
    pub const LAST: FrameId = FrameId(FRAME_COUNT as u8);

    pub fn new(value: u8) -> Result<Self, FrameIdError> {
        if value == 0 || usize::from(value) > FRAME_COUNT {
            return Err(FrameIdError(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot in a frame array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    #[must_use]
    pub fn next(self) -> Option<FrameId> {
        Self::new(self.0 + 1).ok()
    }

    #[must_use]
    pub fn previous(self) -> Option<FrameId> {
        Self::new(self.0 - 1).ok()
    }

    /// All ten frames in order.
    pub fn all() -> impl Iterator<Item = FrameId> {
        (1..=FRAME_COUNT as u8).map(FrameId)
    }
}

impl TryFrom<u8> for FrameId {
    type Error = FrameIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FrameId> for u8 {
    fn from(value: FrameId) -> Self {
        value.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ball Slots
// ============================================================================

/// Which roll within a frame the next submission fills.
///
/// `Third` only exists in the tenth frame, after a strike or spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ball {
    #[default]
    First,
    Second,
    Third,
}

impl Ball {
    /// One-based position within the frame.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Ball::First => 1,
            Ball::Second => 2,
            Ball::Third => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Ball::First => "first",
            Ball::Second => "second",
            Ball::Third => "third",
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
