use std::collections::VecDeque;

use async_trait::async_trait;
use arena_core::{GameSnapshot, Move};

use crate::api::{Agent, AgentError};

/// Plays a fixed list of moves, then stays forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    name: String,
    moves: VecDeque<Move>,
    observed: usize,
}

impl ScriptedAgent {
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
            observed: 0,
        }
    }

    /// Moves not played yet.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Snapshots broadcast to this agent so far.
    pub fn observed(&self) -> usize {
        self.observed
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn choose_move(&mut self, _snapshot: &GameSnapshot) -> Result<Move, AgentError> {
        Ok(self.moves.pop_front().unwrap_or(Move::Stay))
    }

    fn observe(&mut self, _snapshot: &GameSnapshot) {
        self.observed += 1;
    }
}
