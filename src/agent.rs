use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameState;
use crate::search::MoveSelector;

/// A source of moves for one side of the game.
pub trait Agent {
    /// Pick a column for the active side, or `None` when the board is full.
    fn select_move(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// An agent that selects uniformly at random from legal moves. Stands in
/// for a human in autoplay mode.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return None;
        }
        Some(legal[self.rng.random_range(0..legal.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

impl Agent for MoveSelector {
    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        MoveSelector::select_move(self, state)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::game::{full_drawn_board, Player};

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::new();
        let state = GameState::new();
        let legal = state.legal_moves();

        for _ in 0..100 {
            let col = agent.select_move(&state).unwrap();
            assert!(legal.contains(&col), "Column {} is not legal", col);
        }
    }

    #[test]
    fn test_random_agent_full_board() {
        let mut agent = RandomAgent::new();
        let state = GameState::from_board(full_drawn_board(), Player::X);
        assert_eq!(agent.select_move(&state), None);
    }

    #[test]
    fn test_agents_finish_a_game() {
        let mut bot: Box<dyn Agent> = Box::new(MoveSelector::new(SearchConfig {
            depth: 2,
            ..SearchConfig::default()
        }));
        let mut random: Box<dyn Agent> = Box::new(RandomAgent::new());

        let mut state = GameState::new();
        let mut turn = 0;
        loop {
            let agent = if turn % 2 == 0 { &mut bot } else { &mut random };
            let Some(col) = agent.select_move(&state) else {
                break; // board full with no prior win: a draw
            };
            if state.apply_move(col).unwrap().is_terminal() {
                break;
            }
            state.switch_active();
            turn += 1;
            assert!(turn <= 42, "game did not terminate");
        }
    }

    #[test]
    fn test_agent_names() {
        assert_eq!(RandomAgent::new().name(), "Random");
        assert_eq!(
            MoveSelector::new(SearchConfig::default()).name(),
            "Minimax"
        );
    }
}
