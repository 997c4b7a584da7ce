//! Repository contracts for game histories and agent records.

use std::collections::BTreeSet;

use super::error::Result;
use super::types::{AgentId, AgentRecord, AgentResults, AgentStanding, GameHistory, GameId, HistoryRecord};

/// Storage for finished games.
pub trait GameHistoryRepository: Send + Sync {
    /// Stores a game and returns its new id.
    fn save_game_history(&self, game_name: &str, records: &[HistoryRecord]) -> Result<GameId>;

    fn load_game_history(&self, id: GameId) -> Result<Option<GameHistory>>;

    /// Ids of every stored game, ascending.
    fn list_games(&self) -> Result<Vec<GameId>>;
}

/// Storage for agents, their data and their results.
///
/// An agent is identified by the `(owner, name, game_type)` triple.
pub trait AgentRepository: Send + Sync {
    /// Id of the agent with this triple, registering it on first use.
    fn agent_id(&self, owner: &str, name: &str, game_type: &str) -> Result<AgentId>;

    fn agents_by_owner(&self, owner: &str) -> Result<Vec<AgentRecord>>;

    /// Every owner with at least one agent.
    fn owners(&self) -> Result<BTreeSet<String>>;

    /// Stores `data` under `key`, replacing any previous value.
    fn save_agent_data(&self, id: AgentId, key: &str, data: serde_json::Value) -> Result<()>;

    fn load_agent_data(&self, id: AgentId, key: &str) -> Result<Option<serde_json::Value>>;

    /// Folds one game into the agent's results.
    ///
    /// The read-modify-write happens under the repository's lock. Fails with
    /// [`super::RepositoryError::AgentNotFound`] for unknown agents.
    fn save_game_result(
        &self,
        id: AgentId,
        game_id: GameId,
        game_type: &str,
        score: u32,
        is_winner: bool,
    ) -> Result<AgentResults>;

    fn agent_results(&self, id: AgentId) -> Result<Option<AgentResults>>;

    /// Win rates of every agent of `game_type` that has played.
    fn load_game_results(&self, game_type: &str) -> Result<Vec<AgentStanding>>;

    /// Registers the agent if needed and stores its source under `"code"`.
    fn save_agent_code(&self, owner: &str, name: &str, game_type: &str, code: &str) -> Result<AgentId> {
        let id = self.agent_id(owner, name, game_type)?;
        self.save_agent_data(id, "code", serde_json::Value::String(code.to_string()))?;
        Ok(id)
    }

    fn load_agent_code(&self, owner: &str, name: &str, game_type: &str) -> Result<Option<String>> {
        let id = self.agent_id(owner, name, game_type)?;
        Ok(self
            .load_agent_data(id, "code")?
            .and_then(|value| value.as_str().map(str::to_string)))
    }
}
