use std::fmt;

const WIN_SEQUENCES: [[usize; 3]; 8] = [
    // Horizontal
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Vertical
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonal
    [0, 4, 8],
    [2, 4, 6],
];

/// Number of cells on the board, indexed row-major as `row * 3 + col`.
pub const CELLS: usize = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark whose turn it is when `step` moves have been played.
    pub fn for_step(step: usize) -> Mark {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// A snapshot of the grid. Boards are values: marking one returns a new board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Mark>; CELLS],
}

impl Board {
    pub fn new() -> Self {
        let squares = [None; CELLS];
        Self { squares }
    }

    pub fn from_squares(squares: [Option<Mark>; CELLS]) -> Self {
        Self { squares }
    }

    /// Contents of the cell at `index`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.squares.get(index).copied().flatten()
    }

    pub fn mark(&self, index: usize, mark: Mark) -> Board {
        let mut new_board = *self;
        new_board.squares[index] = Some(mark);
        new_board
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(None))
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    /// Mark occupying the first complete line, in row, column, diagonal order.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WIN_SEQUENCES {
            let first = self.squares[a];
            if first.is_some() && first == self.squares[b] && first == self.squares[c] {
                return first;
            }
        }
        None
    }

    fn display_squares(&self) -> [&'static str; CELLS] {
        let mut display = [""; CELLS];
        for (dsquare, square) in display.iter_mut().zip(self.squares.iter()) {
            match square {
                Some(Mark::X) => *dsquare = "X",
                Some(Mark::O) => *dsquare = "O",
                None => *dsquare = " ",
            }
        }
        display
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ds = self.display_squares();
        for (row, cells) in ds.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("---+---+---\n")?;
            }
            writeln!(f, " {} | {} | {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
