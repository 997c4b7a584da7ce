use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::write_json_atomic;
use crate::repository::error::{RepositoryError, Result};
use crate::repository::traits::AgentRepository;
use crate::repository::types::{
    AgentDocument, AgentId, AgentRecord, AgentResults, AgentStanding, GameId,
};

/// All agents in a single JSON document, rewritten on every change.
///
/// Every operation reads the document from disk under the lock, so separate
/// repository values pointing at the same file see each other's writes.
#[derive(Debug)]
pub struct FileAgentRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileAgentRepository {
    pub const FILE_NAME: &'static str = "agents.json";

    /// Opens (or starts) `<base_dir>/agents.json`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<AgentDocument> {
        if !self.path.exists() {
            return Ok(AgentDocument::default());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn read<T>(&self, f: impl FnOnce(&AgentDocument) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        f(&self.load()?)
    }

    fn update<T>(&self, f: impl FnOnce(&mut AgentDocument) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut doc = self.load()?;
        let value = f(&mut doc)?;
        write_json_atomic(&self.path, &doc)?;
        Ok(value)
    }
}

impl AgentRepository for FileAgentRepository {
    fn agent_id(&self, owner: &str, name: &str, game_type: &str) -> Result<AgentId> {
        self.update(|doc| Ok(doc.get_or_insert(owner, name, game_type)))
    }

    fn agents_by_owner(&self, owner: &str) -> Result<Vec<AgentRecord>> {
        self.read(|doc| Ok(doc.by_owner(owner)))
    }

    fn owners(&self) -> Result<BTreeSet<String>> {
        self.read(|doc| Ok(doc.agents.iter().map(|a| a.owner.clone()).collect()))
    }

    fn save_agent_data(&self, id: AgentId, key: &str, data: serde_json::Value) -> Result<()> {
        self.update(|doc| {
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
        let results = self.update(|doc| doc.record_result(id, game_id, score, is_winner))?;
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
