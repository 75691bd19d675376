//! End-to-end runs of the `bowlscore` binary.

use crate::common::{Bowlscore, stderr, stdout};

const PERFECT: [&str; 12] = ["X"; 12];

#[test]
fn scores_rolls_from_arguments() {
    let bowl = Bowlscore::new();
    let output = bowl.run(&PERFECT);
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Game Over. Final score: 300"), "{out}");
    assert!(out.contains('│'));
    assert!(!out.contains("Game incomplete"));
}

#[test]
fn partial_game_reports_next_roll() {
    let bowl = Bowlscore::new();
    let output = bowl.run(&["7", "2", "X"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Score: 9."), "{out}");
    assert!(out.contains("Game incomplete: Frame 3, ball 1: 10 pins standing"));
}

#[test]
fn json_flag_prints_game_state() {
    let bowl = Bowlscore::new();
    let output = bowl.run(&["--json", "3", "5", "8", "2", "5"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cumulative_score"], 23);
    assert_eq!(json["current_frame_index"], 3);
    assert_eq!(json["current_ball"], "second");
    assert_eq!(json["frames"][1]["final_score"], 23);
    assert_eq!(json["game_over"], false);
}

#[test]
fn format_from_environment() {
    let bowl = Bowlscore::new();
    let output = bowl
        .command()
        .env("BOWLSCORE_FORMAT", "json")
        .args(["4", "4"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cumulative_score"], 8);
}

#[test]
fn rejected_roll_fails_with_position() {
    let bowl = Bowlscore::new();
    let output = bowl.run(&["8", "5"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains(r#"roll 2 ("5") rejected"#), "{err}");
    assert!(err.contains("invalid entry: 5 pins entered but only 2 standing"));
}

#[test]
fn roll_after_game_over_fails() {
    let bowl = Bowlscore::new();
    let mut rolls = vec!["0"; 20];
    rolls.push("1");
    let output = bowl.run(&rolls);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("roll 21"));
}

#[test]
fn interactive_reprompts_after_invalid_entry() {
    let bowl = Bowlscore::new();
    let output = bowl.run_interactive(&[], "8\n5\n2\nq\n");
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Frame 1, ball 2: 2 pins standing > Invalid entry"), "{out}");
    assert!(out.contains("Frame 2, ball 1: 10 pins standing > "));
    assert!(!out.contains("Game Over"));
}

#[test]
fn interactive_plays_to_the_end() {
    let bowl = Bowlscore::new();
    let input = "0\n".repeat(20);
    let output = bowl.run_interactive(&["--json"], &input);
    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with("Game Over"));
}

#[test]
fn interactive_stops_at_end_of_input() {
    let bowl = Bowlscore::new();
    let output = bowl.run_interactive(&[], "X\n");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Frame 2, ball 1: 10 pins standing"));
    assert!(!out.contains("Game Over"));
}

#[test]
fn config_sets_tokens_and_ascii_sheet() {
    let bowl = Bowlscore::new();
    bowl.write_config(
        r#"
[input]
strike_tokens = ["S"]

[output]
ascii_only = true
"#,
    );
    let output = bowl.run(&["S", "3"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Balls | X   | 3   |"), "{out}");
    assert!(!out.contains('│'));
}

#[test]
fn flag_overrides_config_format() {
    let bowl = Bowlscore::new();
    bowl.write_config("[output]\nformat = \"sheet\"\n");
    let output = bowl.run(&["--json", "1"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frames"][0]["ball1"], 1);
}

#[test]
fn explicit_config_must_parse() {
    let bowl = Bowlscore::new();
    let path = bowl.home().join("broken.toml");
    std::fs::write(&path, "[output\n").unwrap();

    let output = bowl.run(&["--config", path.to_str().unwrap(), "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse config"));
}

#[test]
fn logs_to_home_directory() {
    let bowl = Bowlscore::new();
    let output = bowl.run(&["1"]);
    assert!(output.status.success());
    let log = bowl
        .home()
        .join(".bowlscore")
        .join("logs")
        .join("bowlscore.log");
    assert!(log.exists());
}
