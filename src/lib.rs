//! Rules engine for snake on a square wrap-around board.
//!
//! The rules core (`grid`, `snake`, `food`, `game`, `score`) has no terminal
//! dependencies. `ticker`, `input` and `render` are the pieces the terminal
//! host in `main.rs` builds on.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod score;
pub mod snake;
pub mod ticker;

pub use error::GameError;
pub use game::{Game, GameStatus, TickOutcome, TickResult};
pub use grid::{Direction, Pos};
