use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the grid")]
    OutOfRange,
    #[error("Nothing to undo or redo")]
    EmptyHistory,
    #[error("Invalid game configuration")]
    InvalidConfiguration,
    #[error("Color is not part of the palette")]
    InvalidColor,
    #[error("Grid is fully captured, no new selections are accepted")]
    AlreadyFinished,
    #[error("Saved session could not be decoded")]
    MalformedSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;
