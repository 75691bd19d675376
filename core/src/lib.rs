//! Ten-pin scoring engine for BowlScore.
//!
//! A [`GameState`] owns the ten frames of one game and is advanced one roll at
//! a time with [`GameState::submit_roll`]. Each roll is checked against the
//! pins still standing, written into the right ball slot, and then any frame
//! whose bonus rolls are now known is settled.
//!
//! ```text
//! submit_roll(raw) -> RollParser::parse -> validate_roll -> dispatch (ball 1/2/3)
//!                                                               |
//!                                                               v
//!                                          cascade: settle rules + advance
//! ```
//!
//! Frames settle in roll order, never in a batch: a single roll settles at most
//! two frames (a pending strike plus the frame it completes).

mod dispatch;
mod error;
mod game;
mod outcome;
mod progression;
mod resolution;
pub mod validator;

pub use error::{ReplayError, RollError};
pub use game::GameState;
pub use outcome::{RollOutcome, Rule, Settlement};
pub use validator::{RollParser, pins_remaining, validate_roll};
