//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the runner and repositories can stay focused on orchestration.

pub mod agent;
pub mod errors;
pub mod wire;

pub use agent::Agent;
pub use errors::{AgentError, Result, RuntimeError};
pub use wire::{move_to_json, parse_move};
