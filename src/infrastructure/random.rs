use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::domain::board::HyperBoard;
use crate::domain::models::{BoardState, PlayerId};
use crate::domain::services::MoveSource;

/// Picks uniformly among the free spaces.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardState> MoveSource<S> for RandomPlayer {
    fn propose_move(&mut self, board: &HyperBoard<S>, _player: PlayerId) -> Option<String> {
        board
            .free_coordinates()
            .choose(&mut self.rng)
            .map(|coord| coord.to_string())
    }
}
