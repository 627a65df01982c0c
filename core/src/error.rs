use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board width and height must be at least 1")]
    InvalidDimensions,
    #[error("Mine count must leave at least one safe cell")]
    InvalidMineCount,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Stored board does not match its own mine layout")]
    InconsistentBoard,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
