//! Menu flow and the round loop.

pub mod controller;

pub use controller::NumbersRoyale;
