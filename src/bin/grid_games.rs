//! Grid Games - console front end
//!
//! Plays one of the engines on stdin/stdout. Logs go to stderr and are
//! controlled with `RUST_LOG`.

#![warn(missing_docs)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grid_games::core::{parse_move, parse_position_or, Position};
use grid_games::games::chess::ChessGame;
use grid_games::games::slide::{Direction, SlideConfig, SlideGame};
use grid_games::games::tictactoe::TicTacToe;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Play 2048, chess or tic-tac-toe in the terminal.
#[derive(Debug, Parser)]
#[command(name = "grid-games", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 2048. Moves are `up`/`down`/`left`/`right` or `w`/`a`/`s`/`d`.
    Slide {
        /// JSON file holding a `SlideConfig`
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Board side length
        #[arg(long)]
        size: Option<usize>,

        /// Score that wins the game
        #[arg(long)]
        target: Option<u64>,
    },
    /// Chess. Moves are `row,col row,col`, e.g. `6,4 4,4`.
    Chess,
    /// Tic-tac-toe. Moves are 1-based `row,col`, e.g. `2,2`.
    Tictactoe,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = Console::new();

    match cli.command {
        Command::Slide {
            config,
            seed,
            size,
            target,
        } => {
            let config = load_slide_config(config, seed, size, target)?;
            run_slide(&mut console, config)
        }
        Command::Chess => run_chess(&mut console),
        Command::Tictactoe => run_tictactoe(&mut console),
    }
}

/// Read the config file if given, then apply flag overrides.
fn load_slide_config(
    path: Option<PathBuf>,
    seed: Option<u64>,
    size: Option<usize>,
    target: Option<u64>,
) -> Result<SlideConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SlideConfig::default(),
    };

    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(size) = size {
        config = config.with_size(size);
    }
    if let Some(target) = target {
        config = config.with_target_score(target);
    }

    anyhow::ensure!(config.size > 0, "board size must be at least 1");
    anyhow::ensure!(!config.tile_values.is_empty(), "tile_values must not be empty");

    debug!(?config, "slide config");
    Ok(config)
}

/// Line-oriented stdin/stdout.
struct Console {
    lines: io::Lines<io::StdinLock<'static>>,
    out: io::Stdout,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
            out: io::stdout(),
        }
    }

    /// Prompt and read one trimmed line. `None` on end of input or `quit`.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}> ")?;
        self.out.flush()?;

        let Some(line) = self.lines.next() else {
            return Ok(None);
        };
        let line = line?.trim().to_string();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

fn run_slide(console: &mut Console, config: SlideConfig) -> Result<()> {
    let mut game = SlideGame::new(config);
    info!(seed = game.config().seed, "starting 2048");

    while !game.is_over() {
        console.show(game.board())?;
        let Some(line) = console.ask("move")? else {
            return Ok(());
        };
        match line.parse::<Direction>() {
            Ok(direction) => {
                let outcome = game.step(direction);
                if !outcome.moved {
                    console.show("nothing moved")?;
                }
            }
            Err(_) => console.show(format!("unknown direction {line:?}"))?,
        }
    }

    console.show(game.board())?;
    if game.is_won() {
        console.show("You win!")
    } else {
        console.show("Game over.")
    }
}

fn run_chess(console: &mut Console) -> Result<()> {
    let mut game = ChessGame::new();
    info!("starting chess");

    while !game.is_over() {
        console.show(game.board())?;
        let Some(line) = console.ask(&format!("{} to move", game.turn()))? else {
            return Ok(());
        };
        let (from, to) = parse_move(&line);
        match game.play(from, to) {
            Ok(Some(captured)) => console.show(format!("captured {captured}"))?,
            Ok(None) => {}
            Err(err) => console.show(err)?,
        }
    }

    console.show(game.board())?;
    match game.winner() {
        Some(color) => console.show(format!("Checkmate, {color} wins.")),
        None => Ok(()),
    }
}

fn run_tictactoe(console: &mut Console) -> Result<()> {
    let mut game = TicTacToe::new();
    info!("starting tic-tac-toe");

    while !game.is_over() {
        console.show(&game)?;
        let Some(line) = console.ask(&format!("{} to place", game.turn()))? else {
            return Ok(());
        };
        let position = parse_position_or(&line, Position::ORIGIN);
        let validation = game.validate_move(position, game.turn());
        if !validation.is_valid {
            console.show(validation.reason)?;
            continue;
        }
        game.place_marker(position, game.turn())?;
    }

    console.show(&game)?;
    match game.winner() {
        Some(marker) => console.show(format!("{marker} wins!")),
        None => console.show("Draw."),
    }
}
