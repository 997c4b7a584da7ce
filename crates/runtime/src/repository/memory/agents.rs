use std::collections::BTreeSet;
use std::sync::RwLock;

use crate::repository::error::{RepositoryError, Result};
use crate::repository::traits::AgentRepository;
use crate::repository::types::{
    AgentDocument, AgentId, AgentRecord, AgentResults, AgentStanding, GameId,
};

/// Agent records held in memory.
///
/// Thread-safe but not persistent across process restarts.
#[derive(Debug, Default)]
pub struct InMemoryAgentRepository {
    doc: RwLock<AgentDocument>,
}

impl InMemoryAgentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&AgentDocument) -> Result<T>) -> Result<T> {
        let doc = self.doc.read().map_err(|_| RepositoryError::LockPoisoned)?;
        f(&doc)
    }

    fn write<T>(&self, f: impl FnOnce(&mut AgentDocument) -> Result<T>) -> Result<T> {
        let mut doc = self.doc.write().map_err(|_| RepositoryError::LockPoisoned)?;
        f(&mut doc)
    }
}

impl AgentRepository for InMemoryAgentRepository {
    fn agent_id(&self, owner: &str, name: &str, game_type: &str) -> Result<AgentId> {
        self.write(|doc| Ok(doc.get_or_insert(owner, name, game_type)))
    }

    fn agents_by_owner(&self, owner: &str) -> Result<Vec<AgentRecord>> {
        self.read(|doc| Ok(doc.by_owner(owner)))
    }

    fn owners(&self) -> Result<BTreeSet<String>> {
        self.read(|doc| Ok(doc.agents.iter().map(|a| a.owner.clone()).collect()))
    }

    fn save_agent_data(&self, id: AgentId, key: &str, data: serde_json::Value) -> Result<()> {
        self.write(|doc| {
            doc.get_mut(id)?.data.insert(key.to_string(), data);
            Ok(())
        })
    }

    fn load_agent_data(&self, id: AgentId, key: &str) -> Result<Option<serde_json::Value>> {
        self.read(|doc| Ok(doc.get(id)?.data.get(key).cloned()))
    }

    fn save_game_result(
        &self,
        id: AgentId,
        game_id: GameId,
        game_type: &str,
        score: u32,
        is_winner: bool,
    ) -> Result<AgentResults> {
        let results = self.write(|doc| doc.record_result(id, game_id, score, is_winner))?;
        tracing::debug!(%id, %game_id, game_type, score, is_winner, "recorded game result");
        Ok(results)
    }

    fn agent_results(&self, id: AgentId) -> Result<Option<AgentResults>> {
        self.read(|doc| Ok(doc.get(id)?.results))
    }

    fn load_game_results(&self, game_type: &str) -> Result<Vec<AgentStanding>> {
        self.read(|doc| Ok(doc.standings(game_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_round_trips_by_key() {
        let repo = InMemoryAgentRepository::new();
        let id = repo.agent_id("ann", "bot", "arena").unwrap();
        repo.save_agent_data(id, "notes", serde_json::json!({"aggro": true}))
            .unwrap();

        assert_eq!(
            repo.load_agent_data(id, "notes").unwrap(),
            Some(serde_json::json!({"aggro": true}))
        );
        assert_eq!(repo.load_agent_data(id, "code").unwrap(), None);
        assert!(repo.load_agent_data(AgentId(99), "notes").is_err());
    }

    #[test]
    fn code_helpers_share_the_agent() {
        let repo = InMemoryAgentRepository::new();
        let id = repo
            .save_agent_code("ann", "bot", "arena", "fn main() {}")
            .unwrap();
        assert_eq!(repo.agent_id("ann", "bot", "arena").unwrap(), id);
        assert_eq!(
            repo.load_agent_code("ann", "bot", "arena").unwrap().as_deref(),
            Some("fn main() {}")
        );
    }

    #[test]
    fn owners_are_deduplicated() {
        let repo = InMemoryAgentRepository::new();
        repo.agent_id("ann", "a", "arena").unwrap();
        repo.agent_id("ann", "b", "arena").unwrap();
        repo.agent_id("bob", "a", "arena").unwrap();
        let owners: Vec<String> = repo.owners().unwrap().into_iter().collect();
        assert_eq!(owners, vec!["ann".to_string(), "bob".to_string()]);
        assert_eq!(repo.agents_by_owner("ann").unwrap().len(), 2);
    }
}
