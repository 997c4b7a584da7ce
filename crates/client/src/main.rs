//! Arena game client binary.
//!
//! Runs one game configured from the environment (see
//! [`RuntimeConfig::from_env`]) and prints the final scores as JSON on
//! stdout. Logs go to stderr and are filtered with `RUST_LOG`.
//!
//! # Examples
//!
//! ```bash
//! ARENA_PLAYERS=4 ARENA_AGENTS=aggressive,random ARENA_SEED=7 cargo run -p arena-client
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use arena_core::ArenaEngine;
use arena_runtime::{
    Agent, AgentId, AgentRepository, FileAgentRepository, FileGameHistory, GameRunner,
    RuntimeConfig,
};
use tracing_subscriber::EnvFilter;

/// Owner recorded for the built-in agents.
const BUILTIN_OWNER: &str = "builtin";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env().context("failed to load configuration")?;
    tracing::info!("Variant: {}", config.arena.variant.as_ref());
    tracing::info!("Seed: {}", config.arena.seed);
    tracing::info!("Persistence: {}", config.enable_persistence);

    let engine = ArenaEngine::new(config.arena.clone()).context("failed to set up the arena")?;
    let roster = engine.state().gladiators.len();
    let game_type = config.arena.variant.as_ref();

    let persistence = if config.enable_persistence {
        let dir = &config.save_data_dir;
        tracing::info!("Save data directory: {}", dir.display());
        let history = FileGameHistory::new(dir.join("games"))
            .with_context(|| format!("cannot open game histories in {}", dir.display()))?;
        let agents = FileAgentRepository::new(dir)
            .with_context(|| format!("cannot open agent records in {}", dir.display()))?;
        Some((Arc::new(history), Arc::new(agents)))
    } else {
        None
    };

    let mut agents: Vec<(AgentId, Box<dyn Agent>)> = Vec::with_capacity(roster);
    for slot in 0..roster {
        let kind = config.agent_for(slot);
        let id = match &persistence {
            Some((_, repo)) => {
                let name = format!("{}-{slot}", kind.as_ref());
                repo.agent_id(BUILTIN_OWNER, &name, game_type)?
            }
            None => AgentId(slot as u64),
        };
        agents.push((id, kind.build(config.arena.seed, slot)));
    }

    let mut runner = GameRunner::new(engine, agents)?.with_max_steps(config.max_steps);
    if let Some((history, repo)) = persistence {
        runner = runner.with_persistence(history, repo);
    }

    let report = runner.run_game().await?;
    if let Some(game_id) = report.game_id {
        tracing::info!("Saved as {}", game_id);
    }

    let summary = serde_json::json!({
        "scores": report.scores,
        "winners": report.winners,
        "steps": report.steps,
        "clock": runner.engine().clock(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
