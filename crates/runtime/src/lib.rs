//! Runtime orchestration for arena games.
//!
//! This crate wires agents, the deterministic engine from `arena-core` and
//! the persistence layer into a playable game loop.
//!
//! Modules are organized by responsibility:
//! - [`runner`] hosts the game loop
//! - [`api`] exposes the agent contract, errors and the move wire format
//! - [`agents`] provides built-in agents
//! - [`repository`] stores game histories and agent statistics
//! - [`config`] loads runtime settings from the environment
pub mod agents;
pub mod api;
pub mod config;
pub mod repository;
pub mod runner;

pub use agents::{AggressiveAgent, RandomAgent, ScriptedAgent, StayAgent};
pub use api::{Agent, AgentError, Result, RuntimeError, move_to_json, parse_move};
pub use config::{AgentKind, RuntimeConfig};
pub use repository::{
    AgentId, AgentRecord, AgentRepository, AgentResults, AgentStanding, FileAgentRepository,
    FileGameHistory, GameHistory, GameHistoryRepository, GameId, HistoryRecord,
    InMemoryAgentRepository, InMemoryGameHistory, RepositoryError,
};
pub use runner::{GameReport, GameRunner, Persistence};
