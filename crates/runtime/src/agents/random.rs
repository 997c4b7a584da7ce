use async_trait::async_trait;
use arena_core::{GameSnapshot, Move, MoveOption};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::my_turn;
use crate::api::{Agent, AgentError};

/// Picks uniformly among every offered concrete move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[async_trait]
impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    async fn choose_move(&mut self, snapshot: &GameSnapshot) -> Result<Move, AgentError> {
        let (_, options) = my_turn(snapshot)?;
        let moves: Vec<Move> = options.iter().flat_map(MoveOption::expand).collect();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::NoOptions)
    }
}
