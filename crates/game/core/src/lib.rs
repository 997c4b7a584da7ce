//! Deterministic arena combat rules and the turn engine.
//!
//! `arena-core` holds the canonical game: gladiators, the shrinking dungeon,
//! the timed event queue and the [`engine::ArenaEngine`] that drives them.
//! It performs no I/O; every random roll is derived from the game seed, so a
//! game is fully reproduced by its seed and the sequence of submitted moves.
pub mod action;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod engine;
pub mod error;
pub mod event;
pub mod gladiator;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod state;

pub use action::{Move, MoveKind, MoveOption};
pub use combat::{AttackOutcome, AttackRolls, CombatParams};
pub use config::{ArenaConfig, GladiatorSpec, Variant};
pub use dungeon::{Bounds, Dungeon, ShrinkPolicy};
pub use engine::{ArenaEngine, EngineError, ExecutedEvent, Phase, SubmitOutcome};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use event::{Event, EventQueue};
pub use gladiator::{BaseSkills, BaseStats, Boosts, Gladiator, Skill};
pub use rng::{Dice, PcgRng, RngOracle, RollPurpose};
pub use rules::{
    EffectContext, EffectRule, EventOutcome, NoEffectReason, OptionRule, ResizeRule, Rules,
};
pub use snapshot::{DungeonView, EventView, GameSnapshot, GladiatorView};
pub use state::{ArenaState, Direction, GladiatorId, Position, Tick};
