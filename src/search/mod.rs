//! Depth-limited alpha-beta minimax search.
//!
//! The [`MoveSelector`] drives the root: it forks the game state per legal
//! column, takes immediate wins on the spot and otherwise hands the fork to
//! the opposing minimizing layer in [`engine`]. Leaves are scored by the
//! positional [`evaluate`] function. The whole search is synchronous,
//! deterministic and single-threaded; each branch owns its private fork.

mod engine;
mod evaluator;
mod selector;

pub use engine::TerminalPolicy;
pub use evaluator::evaluate;
pub use selector::{MoveDecision, MoveSelector};
