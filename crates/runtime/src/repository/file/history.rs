use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::write_json_atomic;
use crate::repository::error::{RepositoryError, Result};
use crate::repository::traits::GameHistoryRepository;
use crate::repository::types::{GameHistory, GameId, HistoryRecord};

/// One pretty-printed JSON file per game: `<base_dir>/game_<id>.json`.
#[derive(Debug)]
pub struct FileGameHistory {
    base_dir: PathBuf,
    // Serializes id allocation between concurrent saves.
    write_lock: Mutex<()>,
}

impl FileGameHistory {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    fn game_path(&self, id: GameId) -> PathBuf {
        self.base_dir.join(format!("game_{}.json", id.0))
    }
}

impl GameHistoryRepository for FileGameHistory {
    fn save_game_history(&self, game_name: &str, records: &[HistoryRecord]) -> Result<GameId> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let id = self
            .list_games()?
            .last()
            .map_or(GameId(0), |last| GameId(last.0 + 1));
        let history = GameHistory {
            id,
            game_name: game_name.to_string(),
            records: records.to_vec(),
        };

        let path = self.game_path(id);
        write_json_atomic(&path, &history)?;
        tracing::debug!("Saved game history: {}", path.display());
        Ok(id)
    }

    fn load_game_history(&self, id: GameId) -> Result<Option<GameHistory>> {
        let path = self.game_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let history: GameHistory = serde_json::from_str(&json)?;
        if history.id != id {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds {}",
                path.display(),
                history.id
            )));
        }
        Ok(Some(history))
    }

    fn list_games(&self) -> Result<Vec<GameId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("game_")
                    .and_then(|s| s.strip_suffix(".json"))
                    .and_then(|s| s.parse::<u64>().ok())
            {
                ids.push(GameId(id));
            }
        }
        ids.sort();
        Ok(ids)
    }
}
