//! Core types: players, the board, RNG, configuration and errors.
//!
//! Everything here is terminal-agnostic. The `ui` and `game` modules drive
//! these types but the rules never print or read.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use board::Board;
pub use config::{
    BoardSizeOption, GameConfig, MainMenuOption, PlayModeOption, BOARD_WIDTH,
    DEFAULT_BOARD_SIZE, INNER_PAD, INNER_WIDTH,
};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, Seat, CPU_NAME};
pub use rng::GameRng;
