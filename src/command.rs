use std::str::FromStr;

use crate::{Error, Session, CELLS};

/// A line of CLI input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in a cell, 0-based.
    Place(usize),
    /// Show the board after this many moves.
    Jump(usize),
    Quit,
}

impl Command {
    /// Forward to `session`. Returns `false` once the user asked to quit.
    pub fn dispatch(self, session: &Session) -> bool {
        match self {
            Command::Place(index) => session.apply_move(index),
            Command::Jump(step) => session.jump_to(step),
            Command::Quit => return false,
        }
        true
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Cells are typed 1-9, the way they are numbered on screen.
    fn from_str(line: &str) -> Result<Command, Error> {
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("quit" | "q"), None, None) => Ok(Command::Quit),
            (Some("jump" | "j"), Some(step), None) => Ok(Command::Jump(step.parse()?)),
            (Some(cell), None, None) if cell.starts_with(|c: char| c.is_ascii_digit()) => {
                match cell.parse::<usize>()? {
                    index @ 1..=CELLS => Ok(Command::Place(index - 1)),
                    index => Err(Error::InvalidIndex(index)),
                }
            }
            _ => Err(Error::UnknownCommand(line.trim().to_string())),
        }
    }
}
