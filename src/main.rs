//! Numbers Royale - terminal entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use numbers_royale::{GameConfig, GameError, NumbersRoyale};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Numbers Royale - play the highest number, once
#[derive(Parser, Debug)]
#[command(name = "numbers-royale")]
#[command(about = "A number-duel game for 2-3 local players", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the computer player (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Show every player's moves on each turn and never clear the screen
    #[arg(long)]
    reveal_board: bool,

    /// Do not clear the screen between frames
    #[arg(long)]
    no_clear: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            reveal_board: self.reveal_board,
            clear_screen: !self.no_clear,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board frames.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut game = NumbersRoyale::new(cli.config(), stdin.lock(), io::stdout());

    match game.main_menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::InputClosed) => {
            info!("input closed, leaving");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
