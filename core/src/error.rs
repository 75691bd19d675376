use thiserror::Error;

/// A roll the engine refused. The game is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("invalid entry: {entered} pins entered but only {remaining} standing")]
    InvalidEntry { entered: u32, remaining: u8 },
    #[error("the game is over; no more rolls are accepted")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("roll {position} rejected: {source}", position = .index + 1)]
pub struct ReplayError {
    /// Zero-based position of the rejected roll in the input sequence.
    pub index: usize,
    #[source]
    pub source: RollError,
}
