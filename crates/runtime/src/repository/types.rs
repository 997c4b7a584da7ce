//! Records stored by the repositories.

use std::collections::BTreeMap;
use std::fmt;

use arena_core::{GameSnapshot, Move};
use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, Result};

/// Identifier of a stored game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

/// Identifier of a registered agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent-{}", self.0)
    }
}

/// One step of a played game as seen by the runner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub game_state: GameSnapshot,
    /// `None` for the initial record.
    pub last_move: Option<Move>,
    /// Agent controlling each gladiator, in roster order.
    pub player_ids: Vec<AgentId>,
}

/// A stored game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub id: GameId,
    pub game_name: String,
    pub records: Vec<HistoryRecord>,
}

/// Aggregated results of one agent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentResults {
    pub num_games: u32,
    pub avg_score: f64,
    pub num_wins: u32,
}

impl AgentResults {
    pub fn first(score: u32, is_winner: bool) -> Self {
        Self {
            num_games: 1,
            avg_score: f64::from(score),
            num_wins: u32::from(is_winner),
        }
    }

    /// Folds one more game into the running average.
    pub fn record(&mut self, score: u32, is_winner: bool) {
        let games = f64::from(self.num_games);
        self.avg_score = (self.avg_score * games + f64::from(score)) / (games + 1.0);
        self.num_games += 1;
        if is_winner {
            self.num_wins += 1;
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        f64::from(self.num_wins) / f64::from(self.num_games)
    }
}

/// A registered agent and everything stored about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: AgentId,
    pub owner: String,
    pub name: String,
    pub game_type: String,
    /// Arbitrary data keyed by name, e.g. `"code"`.
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub results: Option<AgentResults>,
    /// Games this agent's results include.
    #[serde(default)]
    pub games: Vec<GameId>,
}

/// Leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentStanding {
    pub owner: String,
    pub name: String,
    pub win_rate: f64,
}

/// Every agent record plus the id counter; the unit both agent
/// repositories store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDocument {
    pub next_id: u64,
    pub agents: Vec<AgentRecord>,
}

impl AgentDocument {
    /// Existing id for the triple, or a newly registered agent.
    pub fn get_or_insert(&mut self, owner: &str, name: &str, game_type: &str) -> AgentId {
        if let Some(record) = self
            .agents
            .iter()
            .find(|a| a.owner == owner && a.name == name && a.game_type == game_type)
        {
            return record.id;
        }

        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push(AgentRecord {
            id,
            owner: owner.to_string(),
            name: name.to_string(),
            game_type: game_type.to_string(),
            data: BTreeMap::new(),
            results: None,
            games: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: AgentId) -> Result<&AgentRecord> {
        self.agents
            .iter()
            .find(|a| a.id == id)
            .ok_or(RepositoryError::AgentNotFound(id))
    }

    pub fn get_mut(&mut self, id: AgentId) -> Result<&mut AgentRecord> {
        self.agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RepositoryError::AgentNotFound(id))
    }

    pub fn record_result(
        &mut self,
        id: AgentId,
        game_id: GameId,
        score: u32,
        is_winner: bool,
    ) -> Result<AgentResults> {
        let agent = self.get_mut(id)?;
        let results = match agent.results.as_mut() {
            Some(results) => {
                results.record(score, is_winner);
                *results
            }
            None => *agent.results.insert(AgentResults::first(score, is_winner)),
        };
        agent.games.push(game_id);
        Ok(results)
    }

    pub fn standings(&self, game_type: &str) -> Vec<AgentStanding> {
        self.agents
            .iter()
            .filter(|a| a.game_type == game_type)
            .filter_map(|a| {
                a.results.map(|results| AgentStanding {
                    owner: a.owner.clone(),
                    name: a.name.clone(),
                    win_rate: results.win_rate(),
                })
            })
            .collect()
    }

    pub fn by_owner(&self, owner: &str) -> Vec<AgentRecord> {
        self.agents
            .iter()
            .filter(|a| a.owner == owner)
            .cloned()
            .collect()
    }
}
