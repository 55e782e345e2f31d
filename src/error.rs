use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: u16, min: u16 },
    #[error("speed must be a positive number of ticks per second, got {0}")]
    InvalidSpeed(f64),
    #[error("no space available to place food")]
    NoSpace,
}
