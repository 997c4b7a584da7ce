use async_trait::async_trait;
use arena_core::{GameSnapshot, Move};

use crate::api::{Agent, AgentError};

/// Always stays. Every gladiator can always stay.
#[derive(Clone, Debug, Default)]
pub struct StayAgent;

#[async_trait]
impl Agent for StayAgent {
    fn name(&self) -> &str {
        "stay"
    }

    async fn choose_move(&mut self, _snapshot: &GameSnapshot) -> Result<Move, AgentError> {
        Ok(Move::Stay)
    }
}
