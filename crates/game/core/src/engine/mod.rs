//! Event-driven turn engine.
//!
//! The [`ArenaEngine`] is the authoritative owner of [`ArenaState`]. Agents
//! submit moves for the gladiator the engine is waiting on; each move becomes
//! a timed [`Event`]. Once nobody is waiting for a decision the engine pops
//! the earliest event, advances the clock to it, applies its effect through
//! the variant's [`Rules`] and asks the event's owner for its next move.

mod errors;
mod setup;
mod turns;

pub use errors::EngineError;
pub use turns::{ExecutedEvent, SubmitOutcome};

use std::collections::VecDeque;

use crate::action::MoveOption;
use crate::combat::CombatParams;
use crate::config::ArenaConfig;
use crate::dungeon::Dungeon;
use crate::error::ErrorContext;
use crate::event::{Event, EventQueue};
use crate::rng::Dice;
use crate::rules::Rules;
use crate::snapshot::GameSnapshot;
use crate::state::{ArenaState, GladiatorId, Tick};

/// Where the engine is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The engine waits for this gladiator's next move.
    AwaitingMove(GladiatorId),
    GameOver,
}

/// Turn-based arena simulation.
///
/// Every living gladiator has exactly one pending decision or one queued
/// event. The engine keeps no history; runners collect snapshots.
#[derive(Debug)]
pub struct ArenaEngine {
    config: ArenaConfig,
    rules: Rules,
    combat: CombatParams,
    dice: Dice,
    state: ArenaState,
    queue: EventQueue,
    awaiting: VecDeque<GladiatorId>,
}

impl ArenaEngine {
    /// Points added to a living gladiator's score at the end.
    pub const SURVIVAL_BONUS: u32 = 10;

    /// Creates a game with the built-in rules of `config.variant`.
    pub fn new(config: ArenaConfig) -> Result<Self, EngineError> {
        let rules = Rules::for_variant(config.variant);
        Self::with_rules(config, rules)
    }

    /// Creates a game with custom rules.
    pub fn with_rules(config: ArenaConfig, rules: Rules) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;

        let dice = Dice::new(config.seed);
        let specs = setup::roster_specs(&config);
        let gladiators = setup::build_roster(&specs, &dice);
        let dungeon = Dungeon::around(gladiators.iter().map(|g| g.pos()))
            .ok_or(EngineError::InvalidConfig("a game needs at least two gladiators"))?;
        let state = ArenaState::new(gladiators, dungeon);
        let awaiting = state.ids().collect();

        tracing::debug!(
            variant = config.variant.as_ref(),
            seed = config.seed,
            gladiators = state.gladiators.len(),
            "arena created"
        );

        Ok(Self {
            config,
            rules,
            combat: CombatParams::default(),
            dice,
            state,
            queue: EventQueue::new(),
            awaiting,
        })
    }

    /// Overrides the combat constants.
    pub fn with_combat(mut self, combat: CombatParams) -> Self {
        self.combat = combat;
        self
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn state(&self) -> &ArenaState {
        &self.state
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn clock(&self) -> Tick {
        self.state.clock
    }

    /// Number of events executed so far.
    pub fn nonce(&self) -> u64 {
        self.state.nonce
    }

    pub fn phase(&self) -> Phase {
        match self.current_player() {
            Some(player) => Phase::AwaitingMove(player),
            None => Phase::GameOver,
        }
    }

    /// Gladiator whose move is awaited, or `None` once the game is over.
    pub fn current_player(&self) -> Option<GladiatorId> {
        if self.is_game_over() {
            return None;
        }
        self.awaiting.front().copied()
    }

    /// Legal options for `id`. Dead gladiators get an empty list.
    pub fn move_options(&self, id: GladiatorId) -> Result<Vec<MoveOption>, EngineError> {
        if self.state.gladiator(id).is_none() {
            return Err(EngineError::UnknownGladiator(id));
        }
        Ok(self.rules.options.options(&self.state, id))
    }

    /// `true` once at most one team is alive or a time or event limit is hit.
    pub fn is_game_over(&self) -> bool {
        self.state.living_teams().len() <= 1
            || self.state.clock.0 >= self.config.max_ticks
            || self.state.nonce >= self.config.max_events
    }

    /// Per-gladiator scores: damage dealt plus a bonus for surviving.
    pub fn scores(&self) -> Vec<u32> {
        self.state
            .gladiators
            .iter()
            .map(|g| {
                let bonus = if g.is_alive() { Self::SURVIVAL_BONUS } else { 0 };
                g.damage_dealt() + bonus
            })
            .collect()
    }

    /// Every gladiator sharing the top score.
    pub fn winners(&self) -> Vec<GladiatorId> {
        let scores = self.scores();
        let Some(&best) = scores.iter().max() else {
            return Vec::new();
        };
        scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(i, _)| GladiatorId(i))
            .collect()
    }

    /// Owned view of the game. Options are included only for `player`.
    pub fn snapshot(&self, player: Option<GladiatorId>) -> GameSnapshot {
        GameSnapshot {
            clock: self.state.clock,
            nonce: self.state.nonce,
            variant: self.config.variant,
            gladiators: self
                .state
                .ids()
                .zip(&self.state.gladiators)
                .map(|(id, g)| g.view(id))
                .collect(),
            dungeon: self.state.dungeon.view(),
            queue: self.queue.iter().map(Event::view).collect(),
            scores: self.scores(),
            current_player: self.current_player(),
            move_options: player.map(|id| self.rules.options.options(&self.state, id)),
            game_over: self.is_game_over(),
        }
    }

    fn error_context(&self) -> ErrorContext {
        ErrorContext::new(self.state.clock, self.state.nonce)
    }
}
