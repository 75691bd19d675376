//! Scoresheet notation read off real games.

use bowlscore_types::{Frame, FrameId, ball_tokens, total_token};

use crate::common::play;

fn cells(frame: &Frame) -> Vec<String> {
    ball_tokens(frame)
}

#[test]
fn strike_spare_and_gutter_marks() {
    let game = play(&[10, 7, 3, 0, 4, 0, 0]);
    let frames = game.frames();
    assert_eq!(cells(&frames[0]), ["X", ""]);
    assert_eq!(cells(&frames[1]), ["7", "/"]);
    assert_eq!(cells(&frames[2]), ["-", "4"]);
    assert_eq!(cells(&frames[3]), ["-", "-"]);
    assert_eq!(cells(&frames[4]), ["", ""]);
}

#[test]
fn zero_spare_uses_slash() {
    let game = play(&[0, 10]);
    assert_eq!(cells(game.frame(FrameId::FIRST)), ["-", "/"]);
}

#[test]
fn totals_blank_until_settled() {
    let game = play(&[10, 7, 3, 0, 0]);
    let totals: Vec<String> = game.frames().iter().map(total_token).collect();
    assert_eq!(&totals[..4], ["20", "30", "30", ""]);
}

#[test]
fn gutter_total_renders_as_number() {
    let game = play(&[0, 0]);
    assert_eq!(total_token(game.frame(FrameId::FIRST)), "0");
}

#[test]
fn tenth_frame_has_three_cells() {
    let game = play(&[10; 12]);
    let last = game.frame(FrameId::LAST);
    assert_eq!(cells(last), ["X", "/", "/"]);
    assert_eq!(total_token(last), "300");

    let game = play(&[[0u32; 18].as_slice(), &[6, 4, 0]].concat());
    assert_eq!(cells(game.frame(FrameId::LAST)), ["6", "/", "-"]);

    let game = play(&[0; 20]);
    assert_eq!(cells(game.frame(FrameId::LAST)), ["-", "-", ""]);
}
