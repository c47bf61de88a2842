//! # numbers-royale
//!
//! A terminal turn game for 2-3 local players, human or computer.
//!
//! Every seat holds the numbers `1..=N`. Each round, every seat plays one of
//! its remaining numbers; the unique highest number scores a point. The game
//! ends when the numbers run out, or as soon as one seat's score exceeds
//! `N / player_count`.
//!
//! ## Design Principles
//!
//! 1. **Rules Don't Print**: `core` and `rules` never touch the terminal.
//!    Screens read the board; the controller drives it.
//!
//! 2. **Return Values, Not Faults**: A refused move is `None`, an empty
//!    roster is a tie. Only terminal I/O can fail.
//!
//! 3. **Owned Randomness**: Computer seats draw from a `GameRng` forked off
//!    the board's seed, so a session replays exactly with the same seed.
//!
//! ## Modules
//!
//! - `core`: Players, board, RNG, configuration, errors
//! - `rules`: Round and game outcomes, leader scan
//! - `ui`: Bordered rendering, validated input, screens
//! - `game`: Menu flow and the round loop

pub mod core;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSizeOption, GameConfig, GameError, GameRng, MainMenuOption, PlayModeOption,
    Player, PlayerId, Seat,
};

pub use crate::game::NumbersRoyale;

pub use crate::rules::{GameStatus, Leader, RoundResult};

pub use crate::ui::{Console, Gui};
