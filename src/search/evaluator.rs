use crate::game::{GameState, Outcome, COLS, ROWS};

/// How many potential lines of four pass through each cell, used as the
/// positional weight of a disc standing there. Center cells participate in
/// the most lines and weigh the most.
pub(crate) const POSITION_WEIGHTS: [[f64; COLS]; ROWS] = [
    [3.0, 4.0, 5.0, 7.0, 5.0, 4.0, 3.0],
    [4.0, 6.0, 8.0, 10.0, 8.0, 6.0, 4.0],
    [5.0, 8.0, 11.0, 13.0, 11.0, 8.0, 5.0],
    [5.0, 8.0, 11.0, 13.0, 11.0, 8.0, 5.0],
    [4.0, 6.0, 8.0, 10.0, 8.0, 6.0, 4.0],
    [3.0, 4.0, 5.0, 7.0, 5.0, 4.0, 3.0],
];

// Summation bounds of the positional scan. The bottom row and the last
// column are left out, matching the reference scoring this engine is
// held to parity with.
pub(crate) const SCAN_ROWS: usize = ROWS - 1;
pub(crate) const SCAN_COLS: usize = COLS - 1;

/// Resolve a position into a utility from the active side's perspective.
///
/// Terminal outcomes map to the extremes of the extended real line: a proven
/// loss is never worth playing into and a proven win dominates every
/// heuristic estimate. Ongoing positions get the positional weighted sum.
pub fn evaluate(state: &GameState, outcome: Outcome) -> f64 {
    match outcome {
        Outcome::Loss => f64::NEG_INFINITY,
        Outcome::Draw => 0.0,
        Outcome::Win => f64::INFINITY,
        Outcome::Ongoing => positional_score(state),
    }
}

/// Weighted sum of disc placements over the scanned window, signed relative
/// to the active side (own discs count positive, opposing discs negative).
fn positional_score(state: &GameState) -> f64 {
    let mut value = 0.0;
    for row in 0..SCAN_ROWS {
        for col in 0..SCAN_COLS {
            value += POSITION_WEIGHTS[row][col] * state.signed_cell(row, col);
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell, Player};

    fn state_with(cells: &[(usize, Cell)], active: Player) -> GameState {
        // (column, cell) pairs dropped in order
        let mut board = Board::new();
        for &(col, cell) in cells {
            board.drop_disc(col, cell).unwrap();
        }
        GameState::from_board(board, active)
    }

    #[test]
    fn terminal_outcomes_map_to_extremes() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Outcome::Win), f64::INFINITY);
        assert_eq!(evaluate(&state, Outcome::Loss), f64::NEG_INFINITY);
        assert_eq!(evaluate(&state, Outcome::Draw), 0.0);
    }

    #[test]
    fn empty_board_scores_zero() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Outcome::Ongoing), 0.0);
    }

    #[test]
    fn own_disc_scores_its_cell_weight() {
        // A disc dropped in column 2 rests at the bottom row, which is
        // outside the scanned window; stack a second on top of it.
        let state = state_with(&[(2, Cell::X), (2, Cell::X)], Player::X);
        assert_eq!(evaluate(&state, Outcome::Ongoing), POSITION_WEIGHTS[4][2]);
    }

    #[test]
    fn bottom_row_and_last_column_do_not_contribute() {
        let bottom = state_with(&[(0, Cell::X)], Player::X);
        assert_eq!(evaluate(&bottom, Outcome::Ongoing), 0.0);

        let last_col = state_with(&[(6, Cell::X), (6, Cell::X), (6, Cell::X)], Player::X);
        assert_eq!(evaluate(&last_col, Outcome::Ongoing), 0.0);
    }

    #[test]
    fn center_outweighs_edge_on_the_same_row() {
        let center = state_with(&[(3, Cell::X), (3, Cell::X)], Player::X);
        let edge = state_with(&[(0, Cell::X), (0, Cell::X)], Player::X);
        assert!(
            evaluate(&center, Outcome::Ongoing) > evaluate(&edge, Outcome::Ongoing),
            "center disc should outweigh edge disc"
        );
    }

    #[test]
    fn perspective_flip_negates_the_score() {
        let mut state = state_with(
            &[(1, Cell::X), (1, Cell::O), (4, Cell::O), (4, Cell::X)],
            Player::X,
        );
        let from_x = evaluate(&state, Outcome::Ongoing);
        state.switch_active();
        let from_o = evaluate(&state, Outcome::Ongoing);
        assert_eq!(from_x, -from_o);
        assert_ne!(from_x, 0.0);
    }

    #[test]
    fn color_swap_negates_the_score() {
        let drops = [(1, Cell::X), (1, Cell::O), (4, Cell::O), (4, Cell::X), (2, Cell::X)];
        let swapped: Vec<(usize, Cell)> = drops
            .iter()
            .map(|&(col, cell)| {
                let other = match cell {
                    Cell::X => Cell::O,
                    Cell::O => Cell::X,
                    Cell::Empty => Cell::Empty,
                };
                (col, other)
            })
            .collect();

        let state = state_with(&drops, Player::X);
        let mirror = state_with(&swapped, Player::X);
        assert_eq!(
            evaluate(&state, Outcome::Ongoing),
            -evaluate(&mirror, Outcome::Ongoing)
        );
    }

    #[test]
    fn weight_table_is_symmetric() {
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(
                    POSITION_WEIGHTS[row][col],
                    POSITION_WEIGHTS[ROWS - 1 - row][COLS - 1 - col]
                );
            }
        }
    }
}
