//! Move history with a movable "current step" pointer.

use std::fmt;

use crate::board::{Board, Mark, CELLS};
use crate::Error;

/// Every board played along the active branch, plus the step being displayed.
///
/// `boards[0]` is always the empty board and each later board adds exactly one
/// mark to its predecessor. Jumping only moves `step`; playing from an earlier
/// step discards everything after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    boards: Vec<Board>,
    step: usize,
}

/// One row of the move list, wired to the step it jumps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
}

/// Status line shown above the move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl Timeline {
    pub fn new() -> Self {
        Timeline {
            boards: vec![Board::new()],
            step: 0,
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> Board {
        self.boards[self.step]
    }

    pub fn turn(&self) -> Mark {
        Mark::for_step(self.step)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.current().winner()
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.turn()),
        }
    }

    /// The cell and mark that produced the current board, if any move led to it.
    pub fn last_move(&self) -> Option<(usize, Mark)> {
        let previous = self.boards[..self.step].last()?;
        let current = self.current();
        (0..CELLS)
            .find(|&index| previous.get(index) != current.get(index))
            .and_then(|index| current.get(index).map(|mark| (index, mark)))
    }

    pub fn entries(&self) -> Vec<MoveEntry> {
        (0..self.boards.len())
            .map(|step| MoveEntry { step })
            .collect()
    }

    /// Place the current player's mark at `index`, branching off the current step.
    pub fn play(&self, index: usize) -> Result<Timeline, Error> {
        if index >= CELLS {
            return Err(Error::InvalidIndex(index));
        }
        let board = self.current();
        if let Some(winner) = board.winner() {
            return Err(Error::GameOver(winner));
        }
        if !board.is_empty_at(index) {
            return Err(Error::InvalidMove(index));
        }

        let mut boards = self.boards[..=self.step].to_vec();
        boards.push(board.mark(index, self.turn()));
        let step = boards.len() - 1;
        Ok(Timeline { boards, step })
    }

    pub fn jump(&self, step: usize) -> Result<Timeline, Error> {
        if step >= self.boards.len() {
            return Err(Error::InvalidStep {
                step,
                len: self.boards.len(),
            });
        }
        Ok(Timeline {
            boards: self.boards.clone(),
            step,
        })
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            0 => f.write_str("Go to game start"),
            step => write!(f, "Go to move #{}", step),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}
