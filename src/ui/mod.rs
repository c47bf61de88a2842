//! Terminal surfaces: bordered rendering, validated input, and the screens
//! built from them.
//!
//! - `render`: fixed-width frame drawing (`Gui`)
//! - `input`: line reader that reprompts until a predicate accepts (`Console`)
//! - `screens`: board, score and menu screens composed from `Gui` calls

pub mod input;
pub mod render;
pub mod screens;

pub use input::{Console, DEFAULT_WAIT_MESSAGE, INVALID_INPUT_MESSAGE};
pub use render::Gui;
