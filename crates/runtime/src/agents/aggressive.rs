use async_trait::async_trait;
use arena_core::{Direction, GameSnapshot, GladiatorView, Move, MoveOption};

use super::my_turn;
use crate::api::{Agent, AgentError};

/// Hunts the nearest enemy.
///
/// Attacks the weakest enemy in reach; otherwise steps toward the nearest
/// living enemy; otherwise stays. Teammates are never attacked.
#[derive(Clone, Debug, Default)]
pub struct AggressiveAgent;

impl AggressiveAgent {
    fn decide(me: &GladiatorView, snapshot: &GameSnapshot, options: &[MoveOption]) -> Move {
        let is_enemy = |g: &&GladiatorView| g.is_alive() && g.team != me.team;

        for option in options {
            if let MoveOption::Attack { targets } = option
                && let Some(weakest) = targets
                    .iter()
                    .filter_map(|&id| snapshot.gladiator(id))
                    .filter(is_enemy)
                    .min_by_key(|g| (g.cur_hp, g.id))
            {
                return Move::Attack { target: weakest.id };
            }
        }

        let Some(prey) = snapshot
            .gladiators
            .iter()
            .filter(is_enemy)
            .min_by_key(|g| (me.pos.distance(g.pos), g.id))
        else {
            return Move::Stay;
        };

        let steps = options.iter().find_map(|option| match option {
            MoveOption::Step { targets } => Some(targets.as_slice()),
            _ => None,
        });
        let Some(steps) = steps else {
            return Move::Stay;
        };

        let current = me.pos.distance(prey.pos);
        let preferred = Direction::towards(me.pos, prey.pos).filter(|d| steps.contains(d));
        let fallback = steps
            .iter()
            .copied()
            .filter(|&d| (me.pos + d).distance(prey.pos) < current)
            .min_by_key(|&d| (me.pos + d).distance(prey.pos));

        match preferred.or(fallback) {
            Some(target) => Move::Step { target },
            None => Move::Stay,
        }
    }
}

#[async_trait]
impl Agent for AggressiveAgent {
    fn name(&self) -> &str {
        "aggressive"
    }

    async fn choose_move(&mut self, snapshot: &GameSnapshot) -> Result<Move, AgentError> {
        let (me, options) = my_turn(snapshot)?;
        Ok(Self::decide(me, snapshot, options))
    }
}
