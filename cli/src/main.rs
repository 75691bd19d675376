//! BowlScore CLI - binary entry point.
//!
//! ```text
//! main() -> load config -> RollParser + OutputFormat
//!              |
//!              +-- rolls on the command line -> replay -> print once
//!              +-- no rolls                  -> prompt loop on stdin
//! ```
//!
//! Logs go to `~/.bowlscore/logs/bowlscore.log`, never to the terminal.

mod sheet;

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::{self, OpenOptions},
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use bowlscore_config::{BowlScoreConfig, OutputFormat};
use bowlscore_core::{GameState, RollError, RollParser};

use crate::sheet::SheetStyle;

/// Score a game of ten-pin bowling.
#[derive(Debug, Parser)]
#[command(name = "bowlscore", version, about)]
struct Cli {
    /// Print the game as JSON instead of a scoresheet.
    #[arg(long)]
    json: bool,

    /// Config file to use instead of ~/.bowlscore/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Rolls to score, in order (e.g. `X 7 3 9 0`). Reads stdin when empty.
    #[arg(value_name = "ROLL")]
    rolls: Vec<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, stay silent rather than interleave with the sheet.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.bowlscore/logs/bowlscore.log
    if let Some(config_dir) = BowlScoreConfig::path()
        .as_deref()
        .and_then(|path| path.parent())
    {
        candidates.push(config_dir.join("logs").join("bowlscore.log"));
    }

    // Fallback: ./.bowlscore/logs/bowlscore.log
    candidates.push(PathBuf::from(".bowlscore").join("logs").join("bowlscore.log"));

    candidates
}

/// Everything the output side needs, resolved once at startup.
#[derive(Debug, Clone, Copy)]
struct Output {
    format: OutputFormat,
    style: SheetStyle,
}

impl Output {
    fn resolve(cli: &Cli, config: Option<&BowlScoreConfig>) -> Self {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::from_env()
                .or_else(|| OutputFormat::from_config(config))
                .unwrap_or_default()
        };
        let style = SheetStyle {
            ascii_only: config.is_some_and(BowlScoreConfig::ascii_only),
        };
        Self { format, style }
    }

    fn print(self, out: &mut impl Write, game: &GameState) -> Result<()> {
        match self.format {
            OutputFormat::Sheet => writeln!(out, "{}", sheet::render(game, self.style))?,
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(game).context("failed to serialize game")?;
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }
}

fn load_config(cli: &Cli) -> Result<Option<BowlScoreConfig>> {
    if let Some(path) = &cli.config {
        return BowlScoreConfig::load_from(path).map(Some).map_err(Into::into);
    }
    // A broken default config should not stop a game; it was already logged.
    Ok(BowlScoreConfig::load().ok().flatten())
}

fn roll_parser(config: Option<&BowlScoreConfig>) -> RollParser {
    match config.and_then(BowlScoreConfig::strike_tokens) {
        Some(tokens) => RollParser::new(tokens.iter().cloned()),
        None => RollParser::default(),
    }
}

fn run_args(rolls: &[String], parser: &RollParser, output: Output) -> Result<()> {
    let mut game = GameState::new();
    for (index, raw) in rolls.iter().enumerate() {
        game.submit_with(parser, raw)
            .with_context(|| format!("roll {} ({raw:?}) rejected", index + 1))?;
    }

    let mut stdout = io::stdout().lock();
    output.print(&mut stdout, &game)?;
    if output.format == OutputFormat::Sheet && !game.is_game_over() {
        writeln!(stdout, "Game incomplete: {}", sheet::prompt(&game))?;
    }
    Ok(())
}

fn run_interactive(parser: &RollParser, output: Output) -> Result<()> {
    let mut game = GameState::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();

    output.print(&mut stdout, &game)?;
    while !game.is_game_over() {
        write!(stdout, "{} > ", sheet::prompt(&game))?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };
        let line = line.context("failed to read roll from stdin")?;
        if matches!(line.trim(), "q" | "quit") {
            break;
        }

        match game.submit_with(parser, &line) {
            Ok(outcome) => {
                tracing::info!(
                    frame = %outcome.frame,
                    ball = %outcome.ball,
                    pins = %outcome.pins,
                    settled = outcome.settlements.len(),
                    "Roll accepted"
                );
                output.print(&mut stdout, &game)?;
            }
            Err(RollError::InvalidEntry { entered, remaining }) => {
                tracing::debug!(entered, remaining, "Invalid entry");
                writeln!(stdout, "Invalid entry")?;
            }
            Err(RollError::GameOver) => break,
        }
    }

    if game.is_game_over() {
        writeln!(stdout, "Game Over")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let parser = roll_parser(config.as_ref());
    let output = Output::resolve(&cli, config.as_ref());
    tracing::debug!(format = ?output.format, tokens = ?parser.strike_tokens(), "Starting");

    if cli.rolls.is_empty() {
        run_interactive(&parser, output)
    } else {
        run_args(&cli.rolls, &parser, output)
    }
}
