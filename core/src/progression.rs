//! Frame cursor movement. The only place the game ends.

use crate::game::{GAME_OVER_INDEX, GameState};

impl GameState {
    /// Hand the current-frame marker to the next frame, or end the game when
    /// moving past the last one.
    pub(crate) fn advance(&mut self) {
        if self.game_over {
            return;
        }
        if let Some(current) = self.current_frame_id() {
            self.frame_mut(current).set_current(false);
        }
        self.current_frame_index += 1;

        if self.current_frame_index >= GAME_OVER_INDEX {
            self.game_over = true;
            tracing::info!(score = self.cumulative_score, "Game over");
            return;
        }
        if let Some(next) = self.current_frame_id() {
            self.frame_mut(next).set_current(true);
            tracing::debug!(frame = %next, "Advanced to frame");
        }
    }
}
