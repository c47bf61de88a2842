//! Error types for the console driver.
//!
//! Game rules never fail: a rejected move or an empty roster shows up in
//! return values. Only the terminal can fail, either with an I/O error or by
//! running out of input.

use derive_more::{Display, Error, From};

/// Faults raised while talking to the terminal.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Reading from or writing to the terminal failed.
    #[display("terminal I/O failed: {_0}")]
    Io(std::io::Error),

    /// Input ended while waiting for the player.
    #[display("input closed while waiting for the player")]
    #[from(skip)]
    InputClosed,
}

/// Convenience alias used throughout the console layer.
pub type Result<T> = std::result::Result<T, GameError>;
