use std::num::ParseIntError;

use thiserror::Error;

mod board;
mod command;
pub mod config;
mod game;
mod timeline;
#[cfg(feature = "tui")]
pub mod view;

pub use board::{Board, Mark, CELLS};
pub use command::Command;
pub use game::{Game, Session};
pub use timeline::{MoveEntry, Status, Timeline};

/// Reasons an input was ignored. None of these ever change the game state.
#[derive(Clone, Debug, Error)]
pub enum Error {
    #[error("invalid move: square {0} is already taken!")]
    InvalidMove(usize),

    #[error("invalid index: {0}!")]
    InvalidIndex(usize),

    #[error("game over: {0} has already won!")]
    GameOver(Mark),

    #[error("invalid step: {step} (history has {len} entries)!")]
    InvalidStep { step: usize, len: usize },

    #[error("invalid input: {0}!")]
    InvalidInteger(ParseIntError),

    #[error("unknown command: {0:?}!")]
    UnknownCommand(String),
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::InvalidInteger(err)
    }
}
