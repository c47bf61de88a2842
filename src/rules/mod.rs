//! Outcome types and winner determination.
//!
//! Both the round winner (highest number played) and the game winner
//! (highest score) come from the same scan: a running maximum that raises a
//! tie flag whenever another seat matches it. The `Board` feeds the scan
//! and interprets the result.

pub mod outcome;

pub use outcome::{GameStatus, Leader, RoundResult};
