//! Plain-text scoresheet.
//!
//! ```text
//! ------------------------------------------------------------------
//! Frame │  1  │  2  │ 3*  │  4  │ ...
//! ------------------------------------------------------------------
//! Balls │ X   │ 7 / │ 4   │     │ ...
//! Total │  20 │  34 │     │     │ ...
//! ------------------------------------------------------------------
//! ```

use bowlscore_core::GameState;
use bowlscore_types::{Frame, ball_tokens, total_token};

const LABEL_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetStyle {
    pub ascii_only: bool,
}

impl SheetStyle {
    fn bar(self) -> &'static str {
        if self.ascii_only { "|" } else { "│" }
    }

    fn rule(self) -> char {
        if self.ascii_only { '-' } else { '─' }
    }
}

/// Inner width of a frame column: one character per ball cell plus gaps.
fn cell_width(frame: &Frame) -> usize {
    if frame.id().is_last() { 5 } else { 3 }
}

fn ball_cells(frame: &Frame) -> String {
    ball_tokens(frame)
        .into_iter()
        .map(|token| if token.is_empty() { " ".to_string() } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn render(game: &GameState, style: SheetStyle) -> String {
    let bar = style.bar();
    let mut header = format!("{:<LABEL_WIDTH$} ", "Frame");
    let mut balls = format!("{:<LABEL_WIDTH$} ", "Balls");
    let mut totals = format!("{:<LABEL_WIDTH$} ", "Total");

    for frame in game.frames() {
        let width = cell_width(frame);
        let label = if frame.is_current() {
            format!("{}*", frame.id())
        } else {
            frame.id().to_string()
        };
        let cells = ball_cells(frame);
        let total = total_token(frame);
        header.push_str(&format!("{bar} {label:^width$} "));
        balls.push_str(&format!("{bar} {cells:<width$} "));
        totals.push_str(&format!("{bar} {total:>width$} "));
    }
    header.push_str(bar);
    balls.push_str(bar);
    totals.push_str(bar);

    let rule: String = std::iter::repeat_n(style.rule(), header.chars().count()).collect();
    [
        rule.as_str(),
        header.as_str(),
        rule.as_str(),
        balls.as_str(),
        totals.as_str(),
        rule.as_str(),
        status_line(game).as_str(),
    ]
    .join("\n")
}

/// One-line summary under the sheet.
#[must_use]
pub fn status_line(game: &GameState) -> String {
    if game.is_game_over() {
        return format!("Game Over. Final score: {}", game.cumulative_score());
    }
    format!("Score: {}. {}", game.cumulative_score(), prompt(game))
}

/// Where the next roll goes, e.g. `Frame 3, ball 2: 6 pins standing`.
#[must_use]
pub fn prompt(game: &GameState) -> String {
    match game.current_frame_id() {
        Some(frame) => format!(
            "Frame {frame}, ball {}: {} pins standing",
            game.current_ball().number(),
            game.pins_remaining()
        ),
        None => "Game Over".to_string(),
    }
}
