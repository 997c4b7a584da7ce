//! Game loop that connects agents to an engine.
//!
//! The runner asks the current player's agent for a move, submits it,
//! records the resulting public snapshot and broadcasts it to every agent,
//! until the engine reports game over. Finished games are optionally
//! persisted: first the history, then every agent's result.

use std::collections::HashSet;
use std::sync::Arc;

use arena_core::{ArenaEngine, GladiatorId};

use crate::api::{Agent, Result, RuntimeError};
use crate::repository::{AgentId, AgentRepository, GameHistoryRepository, GameId, HistoryRecord};

/// Repositories a finished game is written to.
#[derive(Clone)]
pub struct Persistence {
    pub history: Arc<dyn GameHistoryRepository>,
    pub agents: Arc<dyn AgentRepository>,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameReport {
    /// Id of the stored history when persistence is enabled.
    pub game_id: Option<GameId>,
    pub scores: Vec<u32>,
    pub winners: Vec<GladiatorId>,
    /// Moves submitted.
    pub steps: usize,
    pub history: Vec<HistoryRecord>,
}

/// Drives one game from start to finish.
pub struct GameRunner {
    engine: ArenaEngine,
    agents: Vec<(AgentId, Box<dyn Agent>)>,
    persistence: Option<Persistence>,
    max_steps: usize,
}

impl GameRunner {
    pub const DEFAULT_MAX_STEPS: usize = 100_000;

    /// Pairs every gladiator, in roster order, with an agent.
    ///
    /// Agent ids must be unique: results are recorded once per id and game.
    pub fn new(engine: ArenaEngine, agents: Vec<(AgentId, Box<dyn Agent>)>) -> Result<Self> {
        let expected = engine.state().gladiators.len();
        if agents.len() != expected {
            return Err(RuntimeError::AgentCount {
                expected,
                provided: agents.len(),
            });
        }
        let mut seen = HashSet::with_capacity(agents.len());
        if let Some((id, _)) = agents.iter().find(|(id, _)| !seen.insert(*id)) {
            return Err(RuntimeError::DuplicateAgent(*id));
        }
        Ok(Self {
            engine,
            agents,
            persistence: None,
            max_steps: Self::DEFAULT_MAX_STEPS,
        })
    }

    pub fn with_persistence(
        mut self,
        history: Arc<dyn GameHistoryRepository>,
        agents: Arc<dyn AgentRepository>,
    ) -> Self {
        self.persistence = Some(Persistence { history, agents });
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn engine(&self) -> &ArenaEngine {
        &self.engine
    }

    fn player_ids(&self) -> Vec<AgentId> {
        self.agents.iter().map(|(id, _)| *id).collect()
    }

    /// Plays the game to the end.
    ///
    /// Engine, agent and repository failures abort the game and propagate.
    pub async fn run_game(&mut self) -> Result<GameReport> {
        let player_ids = self.player_ids();
        let mut history = vec![HistoryRecord {
            game_state: self.engine.snapshot(None),
            last_move: None,
            player_ids: player_ids.clone(),
        }];

        tracing::info!(
            variant = self.engine.config().variant.as_ref(),
            seed = self.engine.config().seed,
            players = self.agents.len(),
            "game started"
        );

        let mut steps = 0;
        while let Some(player) = self.engine.current_player() {
            if steps >= self.max_steps {
                return Err(RuntimeError::StepLimitExceeded(self.max_steps));
            }

            let snapshot = self.engine.snapshot(Some(player));
            let (_, agent) = &mut self.agents[player.index()];
            let mv = agent
                .choose_move(&snapshot)
                .await
                .map_err(|source| RuntimeError::Agent {
                    agent: agent.name().to_string(),
                    source,
                })?;

            let outcome = self.engine.submit_move(mv)?;
            steps += 1;
            for executed in &outcome.executed {
                tracing::debug!(
                    owner = executed.event.owner.index(),
                    at = executed.event.time_stamp.0,
                    outcome = ?executed.outcome,
                    "event executed"
                );
            }

            let record = HistoryRecord {
                game_state: self.engine.snapshot(None),
                last_move: Some(mv),
                player_ids: player_ids.clone(),
            };
            self.broadcast(&record);
            history.push(record);
        }

        let scores = self.engine.scores();
        let winners = self.engine.winners();
        tracing::info!(?scores, ?winners, steps, clock = self.engine.clock().0, "game over");

        let game_id = match &self.persistence {
            Some(persistence) => Some(self.persist(persistence, &history, &scores)?),
            None => None,
        };

        Ok(GameReport {
            game_id,
            scores,
            winners,
            steps,
            history,
        })
    }

    fn broadcast(&mut self, record: &HistoryRecord) {
        for (_, agent) in &mut self.agents {
            agent.observe(&record.game_state);
        }
    }

    fn persist(
        &self,
        persistence: &Persistence,
        history: &[HistoryRecord],
        scores: &[u32],
    ) -> Result<GameId> {
        let config = self.engine.config();
        let game_id = persistence
            .history
            .save_game_history(config.variant.game_name(), history)?;

        let best = scores.iter().copied().max().unwrap_or(0);
        let game_type = config.variant.as_ref();
        for ((agent_id, _), &score) in self.agents.iter().zip(scores) {
            persistence
                .agents
                .save_game_result(*agent_id, game_id, game_type, score, score == best)?;
        }

        tracing::info!(%game_id, records = history.len(), "game saved");
        Ok(game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::StayAgent;
    use arena_core::ArenaConfig;

    #[test]
    fn agent_count_must_match_roster() {
        let engine = ArenaEngine::new(ArenaConfig::new().with_players(3)).unwrap();
        let agents: Vec<(AgentId, Box<dyn Agent>)> = vec![(AgentId(0), Box::new(StayAgent))];
        assert!(matches!(
            GameRunner::new(engine, agents),
            Err(RuntimeError::AgentCount {
                expected: 3,
                provided: 1
            })
        ));
    }

    #[test]
    fn one_agent_cannot_play_two_gladiators() {
        let engine = ArenaEngine::new(ArenaConfig::new().with_players(3)).unwrap();
        let agents: Vec<(AgentId, Box<dyn Agent>)> = vec![
            (AgentId(4), Box::new(StayAgent)),
            (AgentId(5), Box::new(StayAgent)),
            (AgentId(4), Box::new(StayAgent)),
        ];
        assert!(matches!(
            GameRunner::new(engine, agents),
            Err(RuntimeError::DuplicateAgent(AgentId(4)))
        ));
    }
}
