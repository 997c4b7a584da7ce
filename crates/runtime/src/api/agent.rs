//! Asynchronous abstraction for sourcing gladiator moves.
//!
//! Runtime users plug in [`Agent`] implementations so games can run with
//! scripted fixtures, simple bots or remote players.
use async_trait::async_trait;
use arena_core::{GameSnapshot, Move};

use super::errors::AgentError;

/// Controls one gladiator.
///
/// The runner asks for a move with a snapshot whose `current_player` is the
/// agent's gladiator and whose `move_options` are that gladiator's options.
/// After every move, every agent observes the resulting public snapshot.
#[async_trait]
pub trait Agent: Send {
    fn name(&self) -> &str;

    async fn choose_move(&mut self, snapshot: &GameSnapshot) -> Result<Move, AgentError>;

    fn observe(&mut self, _snapshot: &GameSnapshot) {}
}
