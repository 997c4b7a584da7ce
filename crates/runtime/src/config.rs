//! Runtime configuration structures and loaders.

use std::env;
use std::path::PathBuf;

use arena_core::{ArenaConfig, Variant};

use crate::agents::{AggressiveAgent, RandomAgent, StayAgent};
use crate::api::{Agent, Result, RuntimeError};

/// Built-in agent selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AgentKind {
    Stay,
    Random,
    Aggressive,
}

impl AgentKind {
    /// Builds the agent for roster slot `slot`. Random agents derive their
    /// seed from the game seed and the slot.
    pub fn build(self, game_seed: u64, slot: usize) -> Box<dyn Agent> {
        match self {
            AgentKind::Stay => Box::new(StayAgent),
            AgentKind::Random => Box::new(RandomAgent::new(game_seed ^ (slot as u64 + 1))),
            AgentKind::Aggressive => Box::new(AggressiveAgent),
        }
    }
}

/// Everything needed to run one game from the binary.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub arena: ArenaConfig,
    /// One per gladiator; the last entry is repeated when there are fewer.
    pub agents: Vec<AgentKind>,
    pub max_steps: usize,
    pub enable_persistence: bool,
    pub save_data_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            agents: vec![AgentKind::Aggressive],
            max_steps: crate::runner::GameRunner::DEFAULT_MAX_STEPS,
            enable_persistence: false,
            save_data_dir: default_save_dir(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - Game seed (default: 0)
    /// - `ARENA_PLAYERS` - Number of gladiators (default: 2)
    /// - `ARENA_VARIANT` - `arena` or `pit` (default: arena)
    /// - `ARENA_MAX_TICKS` - Clock limit (default: 100000)
    /// - `ARENA_MAX_STEPS` - Runner step limit (default: 100000)
    /// - `ARENA_AGENTS` - Comma list of `stay`, `random`, `aggressive` (default: aggressive)
    /// - `ENABLE_PERSISTENCE` - Save games and results (default: false)
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// Values that are present but cannot be parsed are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = parse_var::<u64>(&lookup, "ARENA_SEED")? {
            config.arena.seed = seed;
        }
        if let Some(players) = parse_var::<usize>(&lookup, "ARENA_PLAYERS")? {
            config.arena.players = players;
        }
        if let Some(variant) = parse_var::<Variant>(&lookup, "ARENA_VARIANT")? {
            config.arena.variant = variant;
        }
        if let Some(max_ticks) = parse_var::<u64>(&lookup, "ARENA_MAX_TICKS")? {
            config.arena.max_ticks = max_ticks;
        }
        if let Some(max_steps) = parse_var::<usize>(&lookup, "ARENA_MAX_STEPS")? {
            config.max_steps = max_steps.max(1);
        }
        if let Some(agents) = lookup("ARENA_AGENTS") {
            config.agents = parse_agents(&agents)?;
        }
        if let Some(enable) = parse_bool_var(&lookup, "ENABLE_PERSISTENCE")? {
            config.enable_persistence = enable;
        }
        if let Some(dir) = lookup("SAVE_DATA_DIR") {
            config.save_data_dir = PathBuf::from(dir);
        }

        config
            .arena
            .validate()
            .map_err(|reason| RuntimeError::InvalidConfig(reason.to_string()))?;
        Ok(config)
    }

    /// Agent kind for each roster slot.
    pub fn agent_for(&self, slot: usize) -> AgentKind {
        self.agents
            .get(slot)
            .or(self.agents.last())
            .copied()
            .unwrap_or(AgentKind::Stay)
    }
}

/// Parses a comma separated agent list such as `"random, aggressive"`.
pub fn parse_agents(list: &str) -> Result<Vec<AgentKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<AgentKind>()
                .map_err(|_| RuntimeError::InvalidConfig(format!("unknown agent '{name}'")))
        })
        .collect()
}

/// Platform data directory, e.g. `~/.local/share/arena` on Linux.
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidConfig(format!("{key}: cannot parse '{raw}'")))
}

fn parse_bool_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<bool>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(RuntimeError::InvalidConfig(format!(
            "{key}: expected a boolean, got '{raw}'"
        ))),
    }
}
