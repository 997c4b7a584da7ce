use std::sync::RwLock;

use crate::repository::error::{RepositoryError, Result};
use crate::repository::traits::GameHistoryRepository;
use crate::repository::types::{GameHistory, GameId, HistoryRecord};

/// Game histories held in memory. Ids count up from zero.
#[derive(Debug, Default)]
pub struct InMemoryGameHistory {
    games: RwLock<Vec<GameHistory>>,
}

impl InMemoryGameHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameHistoryRepository for InMemoryGameHistory {
    fn save_game_history(&self, game_name: &str, records: &[HistoryRecord]) -> Result<GameId> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let id = GameId(games.len() as u64);
        games.push(GameHistory {
            id,
            game_name: game_name.to_string(),
            records: records.to_vec(),
        });
        Ok(id)
    }

    fn load_game_history(&self, id: GameId) -> Result<Option<GameHistory>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(games.get(id.0 as usize).cloned())
    }

    fn list_games(&self) -> Result<Vec<GameId>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(games.iter().map(|game| game.id).collect())
    }
}
