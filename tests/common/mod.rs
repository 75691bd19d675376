//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use bowlscore_core::GameState;
use tempfile::TempDir;

/// Replay `rolls` into a fresh game, panicking on any rejection.
pub fn play(rolls: &[u32]) -> GameState {
    GameState::replay(rolls.iter().copied()).unwrap()
}

/// Settled score of every frame, in order.
pub fn frame_scores(game: &GameState) -> Vec<Option<u16>> {
    game.frames().iter().map(|frame| frame.final_score()).collect()
}

/// A `bowlscore` invocation isolated in its own home directory.
pub struct Bowlscore {
    home: TempDir,
}

impl Bowlscore {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.home.path().to_path_buf()
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.path().join(".bowlscore");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), body).unwrap();
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_bowlscore"));
        command
            .env("HOME", self.home.path())
            .env_remove("BOWLSCORE_FORMAT")
            .env_remove("RUST_LOG")
            .current_dir(self.home.path());
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    /// Run with no roll arguments, feeding `input` on stdin.
    pub fn run_interactive(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
