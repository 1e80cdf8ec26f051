pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A single cell of the grid. X is the first mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// The 6×7 grid. Row 0 is the top, row 5 the bottom; discs fall to the
/// lowest empty cell of their column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// Why a drop was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column index out of range (expected 0-6)")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_disc(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in four in a row
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        self.check_horizontal(row, col, cell)
            || self.check_vertical(row, col, cell)
            || self.check_diagonal_up(row, col, cell)
            || self.check_diagonal_down(row, col, cell)
    }

    /// Check horizontal win (left-right through the position)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1; // Count the current disc

        // Check left
        let mut c = col as i32 - 1;
        while c >= 0 && self.cells[row][c as usize] == cell {
            count += 1;
            c -= 1;
        }

        // Check right
        let mut c = col + 1;
        while c < COLS && self.cells[row][c] == cell {
            count += 1;
            c += 1;
        }

        count >= 4
    }

    /// Check vertical win (down from the position)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Only need to check downward (discs fall down)
        let mut r = row + 1;
        while r < ROWS && self.cells[r][col] == cell {
            count += 1;
            r += 1;
        }

        count >= 4
    }

    /// Check diagonal win (bottom-left to top-right, /)
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check down-left
        let mut r = row as i32 + 1;
        let mut c = col as i32 - 1;
        while r < ROWS as i32 && c >= 0 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r += 1;
            c -= 1;
        }

        // Check up-right
        let mut r = row as i32 - 1;
        let mut c = col as i32 + 1;
        while r >= 0 && c < COLS as i32 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r -= 1;
            c += 1;
        }

        count >= 4
    }

    /// Check diagonal win (top-left to bottom-right, \)
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check up-left
        let mut r = row as i32 - 1;
        let mut c = col as i32 - 1;
        while r >= 0 && c >= 0 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r -= 1;
            c -= 1;
        }

        // Check down-right
        let mut r = row as i32 + 1;
        let mut c = col as i32 + 1;
        while r < ROWS as i32 && c < COLS as i32 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r += 1;
            c += 1;
        }

        count >= 4
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
