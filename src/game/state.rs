use super::board::{COLS, ROWS};
use super::{Board, Cell, MoveError, Player};

/// Result of a move, always reported from the perspective of the side that
/// just moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    Ongoing,
}

impl Outcome {
    /// True for anything but `Ongoing`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Swap Win and Loss. Used when a result reported in the mover's view
    /// has to be read from the opposing side.
    pub fn invert(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            other => other,
        }
    }

    /// Legacy numeric reward convention: win = 1, draw = 0.5, loss = -1,
    /// ongoing = 0.
    pub fn reward(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss => -1.0,
            Outcome::Draw => 0.5,
            Outcome::Ongoing => 0.0,
        }
    }
}

/// The board environment the search operates on: the grid plus whose
/// perspective moves and evaluation currently use.
///
/// `apply_move` deliberately does *not* switch the active side. The search
/// layers own perspective switching and call [`GameState::switch_active`]
/// exactly once on entry, so a forked state keeps the forker's perspective
/// until the next layer claims it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Player,
}

impl GameState {
    /// Create the initial state of a game. X moves first.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            active: Player::X,
        }
    }

    /// Build a state from an existing board with the given side to move.
    pub fn from_board(board: Board, active: Player) -> Self {
        GameState { board, active }
    }

    /// The side whose perspective is currently active.
    pub fn active(&self) -> Player {
        self.active
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns that can still take a disc, in ascending order. Empty when
    /// the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Toggle the active side. Subsequent moves, outcome reporting and
    /// heuristic evaluation use the new perspective.
    pub fn switch_active(&mut self) {
        self.active = self.active.other();
    }

    /// An independent copy of this state. The board is a plain value type,
    /// so forks are cheap and fully isolated from their origin.
    pub fn fork(&self) -> GameState {
        *self
    }

    /// Drop the active side's disc in `column` and report the outcome from
    /// the mover's own view: `Win` if the drop completed four in a row,
    /// `Draw` if it filled the board, `Ongoing` otherwise.
    pub fn apply_move(&mut self, column: usize) -> Result<Outcome, MoveError> {
        let row = self.board.drop_disc(column, self.active.to_cell())?;

        if self.board.check_win(row, column) {
            Ok(Outcome::Win)
        } else if self.board.is_full() {
            Ok(Outcome::Draw)
        } else {
            Ok(Outcome::Ongoing)
        }
    }

    /// Numeric value of a cell relative to the active side: own disc = 1,
    /// opponent disc = -1, empty = 0.
    pub fn signed_cell(&self, row: usize, col: usize) -> f64 {
        match self.board.get(row, col) {
            Cell::Empty => 0.0,
            cell if cell == self.active.to_cell() => 1.0,
            _ => -1.0,
        }
    }

    /// True when no column can take another disc.
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A full board with no four in a row anywhere, used by tests that need a
/// drawn position. Cells alternate by row parity, with the parity flipped
/// for columns 3-5 so no line of four forms in any direction.
#[cfg(test)]
pub fn full_drawn_board() -> Board {
    let mut board = Board::new();
    for col in 0..COLS {
        let flipped = (3..=5).contains(&col);
        for i in 0..ROWS {
            let row = ROWS - 1 - i; // drop order is bottom-up
            let cell = if (row % 2 == 1) != flipped {
                Cell::X
            } else {
                Cell::O
            };
            board.drop_disc(col, cell).unwrap();
        }
    }
    board
}
