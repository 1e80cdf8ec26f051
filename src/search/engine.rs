use serde::{Deserialize, Serialize};

use crate::game::{GameState, Outcome};

use super::evaluator::evaluate;

/// What a search layer does when one of its child moves ends the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// Return the terminal child's utility for the whole ply at once,
    /// without looking at the remaining sibling moves. This reproduces the
    /// reference engine move for move, but it is knowingly incomplete: a
    /// winning reply sitting in a later column is never seen once any
    /// terminal sibling (even a losing one) has been found.
    #[default]
    ShortCircuit,
    /// Treat the terminal child as one candidate value and keep scanning
    /// the rest of the ply. Corrected variant of `ShortCircuit`.
    Exhaustive,
}

/// Maximizing layer: the side to move at this ply picks the child with the
/// greatest utility.
///
/// The state is taken by value; it is the caller's fork and this layer owns
/// it from here on. Perspective is switched on entry so evaluation reports
/// the position as seen by the side about to move.
pub(crate) fn max_value(
    mut state: GameState,
    mut alpha: f64,
    beta: f64,
    depth: u32,
    policy: TerminalPolicy,
) -> f64 {
    state.switch_active();

    if depth == 0 {
        return evaluate(&state, Outcome::Ongoing);
    }

    let mut v = f64::NEG_INFINITY;

    for column in state.legal_moves() {
        let mut succ = state.fork();
        let outcome = succ.apply_move(column).expect("legal move must apply");

        if outcome.is_terminal() {
            match policy {
                TerminalPolicy::ShortCircuit => return evaluate(&succ, outcome),
                TerminalPolicy::Exhaustive => {
                    v = v.max(evaluate(&succ, outcome));
                }
            }
        } else {
            v = v.max(min_value(succ, alpha, beta, depth - 1, policy));
        }

        if v >= beta {
            return v; // beta cutoff
        }
        alpha = alpha.max(v);
    }

    v
}

/// Minimizing layer: mirror of [`max_value`] for the opposing side.
///
/// Outcomes are always reported in the mover's own view, and the mover at
/// this ply is the opponent of the side the utility is for, so a mover win
/// is inverted to a loss before it is resolved into a utility.
pub(crate) fn min_value(
    mut state: GameState,
    alpha: f64,
    mut beta: f64,
    depth: u32,
    policy: TerminalPolicy,
) -> f64 {
    state.switch_active();

    if depth == 0 {
        return evaluate(&state, Outcome::Ongoing);
    }

    let mut v = f64::INFINITY;

    for column in state.legal_moves() {
        let mut succ = state.fork();
        let outcome = succ.apply_move(column).expect("legal move must apply");

        if outcome.is_terminal() {
            let outcome = outcome.invert();
            match policy {
                TerminalPolicy::ShortCircuit => return evaluate(&succ, outcome),
                TerminalPolicy::Exhaustive => {
                    v = v.min(evaluate(&succ, outcome));
                }
            }
        } else {
            v = v.min(max_value(succ, alpha, beta, depth - 1, policy));
        }

        if v <= alpha {
            return v; // alpha cutoff
        }
        beta = beta.min(v);
    }

    v
}
