//! Persistence for finished games and agent statistics.
//!
//! The runner writes one [`GameHistory`] per game and folds every agent's
//! score into its [`AgentResults`]. Both concerns have an in-memory
//! implementation for tests and embedding, and a JSON file implementation
//! for the binary.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileAgentRepository, FileGameHistory};
pub use memory::{InMemoryAgentRepository, InMemoryGameHistory};
pub use traits::{AgentRepository, GameHistoryRepository};
pub use types::{
    AgentDocument, AgentId, AgentRecord, AgentResults, AgentStanding, GameHistory, GameId,
    HistoryRecord,
};
