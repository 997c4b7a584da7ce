//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, repositories and agents so the binary can
//! bubble them up with consistent context.

use thiserror::Error;

use arena_core::EngineError;

use crate::repository::AgentId;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("agent {agent} failed: {source}")]
    Agent {
        agent: String,
        #[source]
        source: AgentError,
    },

    #[error("malformed move: {0}")]
    MalformedMove(String),

    #[error("game did not finish within {0} steps")]
    StepLimitExceeded(usize),

    #[error("{expected} gladiators need agents, {provided} were given")]
    AgentCount { expected: usize, provided: usize },

    #[error("agent {0} controls more than one gladiator")]
    DuplicateAgent(AgentId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures raised by an [`super::Agent`] while choosing a move.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("snapshot carries no move options")]
    NoOptions,

    #[error("snapshot is not addressed to this agent")]
    NotMyTurn,

    #[error("{0}")]
    Other(String),
}
