//! Built-in agents.
//!
//! Useful as opponents, as fallbacks and as fixtures in tests.

mod aggressive;
mod random;
mod scripted;
mod stay;

pub use aggressive::AggressiveAgent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
pub use stay::StayAgent;

use arena_core::{GameSnapshot, GladiatorView, MoveOption};

use crate::api::AgentError;

/// The gladiator a snapshot asks a decision for, with its options.
fn my_turn(snapshot: &GameSnapshot) -> Result<(&GladiatorView, &[MoveOption]), AgentError> {
    let me = snapshot
        .current_player
        .and_then(|id| snapshot.gladiator(id))
        .ok_or(AgentError::NotMyTurn)?;
    let options = snapshot.move_options.as_deref().ok_or(AgentError::NoOptions)?;
    Ok((me, options))
}
