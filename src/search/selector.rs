use std::time::Instant;

use tracing::debug;

use crate::config::SearchConfig;
use crate::game::{GameState, Outcome, COLS};

use super::engine::min_value;

/// The selector's full answer for one position: the chosen column plus
/// advisory diagnostics. Only `column` affects play.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDecision {
    /// The chosen column, 0-6.
    pub column: usize,
    /// Search value of the chosen move; infinite for an immediate win.
    pub value: f64,
    /// Per-column search values, indexed by column. `None` for columns that
    /// are full or were never searched (populated only when the config's
    /// diagnostics flag is set).
    pub values: [Option<f64>; COLS],
    /// True when the move was taken on the immediate-win short cut without
    /// entering the recursion.
    pub immediate_win: bool,
}

/// Root driver of the search: ranks the legal moves of a position and picks
/// the best one.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    config: SearchConfig,
}

impl MoveSelector {
    pub fn new(config: SearchConfig) -> Self {
        MoveSelector { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick a column for the active side, or `None` if the board is full.
    pub fn select_move(&self, state: &GameState) -> Option<usize> {
        self.decide(state).map(|decision| decision.column)
    }

    /// Pick a column and report how the candidates ranked.
    ///
    /// Candidates are tried in ascending column order. A move that wins on
    /// the spot is returned at once, first such column winning. Otherwise
    /// every candidate is handed to the opponent's minimizing layer with the
    /// full depth and an open window, and the best value wins with later
    /// columns taking ties (a candidate replaces the running best when its
    /// value is greater than *or equal to* it).
    pub fn decide(&self, state: &GameState) -> Option<MoveDecision> {
        let started = Instant::now();
        let legal = state.legal_moves();
        if legal.is_empty() {
            return None;
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best_column = None;
        let mut values = [None; COLS];

        for &column in &legal {
            let mut succ = state.fork();
            let outcome = succ.apply_move(column).expect("legal move must apply");

            if outcome == Outcome::Win {
                debug!(column, elapsed = ?started.elapsed(), "immediate winning move");
                if self.config.diagnostics {
                    values[column] = Some(f64::INFINITY);
                }
                return Some(MoveDecision {
                    column,
                    value: f64::INFINITY,
                    values,
                    immediate_win: true,
                });
            }

            let value = min_value(
                succ,
                f64::NEG_INFINITY,
                f64::INFINITY,
                self.config.depth,
                self.config.terminal_policy,
            );

            if self.config.diagnostics {
                values[column] = Some(value);
            }

            // >= so that a tie goes to the most recently seen column
            if value >= best_value {
                best_value = value;
                best_column = Some(column);
            }
        }

        let column = best_column.expect("legal moves were not empty");
        debug!(
            column,
            value = best_value,
            ?values,
            elapsed = ?started.elapsed(),
            "selected move"
        );

        Some(MoveDecision {
            column,
            value: best_value,
            values,
            immediate_win: false,
        })
    }
}
