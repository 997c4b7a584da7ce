//! In-memory repositories, lost when the process exits.

mod agents;
mod history;

pub use agents::InMemoryAgentRepository;
pub use history::InMemoryGameHistory;
