//! Per-variant game rules.
//!
//! A game variant is a bundle of three policies: which moves a gladiator is
//! offered, what an executed event does, and how the dungeon is resized
//! afterwards. The engine is written once against these traits; variants
//! differ only in the [`Rules`] they plug in.

mod positional;

pub use positional::{PositionalEffects, PositionalOptions};

use crate::action::MoveOption;
use crate::combat::{AttackOutcome, CombatParams};
use crate::config::Variant;
use crate::dungeon::{Dungeon, ShrinkPolicy};
use crate::event::Event;
use crate::gladiator::{Gladiator, Skill};
use crate::rng::Dice;
use crate::state::{ArenaState, GladiatorId, Position};

/// Generates the legal options for one gladiator.
pub trait OptionRule: Send + Sync {
    /// Options for `id`. Empty for dead or unknown gladiators.
    fn options(&self, state: &ArenaState, id: GladiatorId) -> Vec<MoveOption>;
}

/// Applies the effect of an executed event.
///
/// Illegal-in-simulation conditions must come back as
/// [`EventOutcome::NoEffect`], never as a panic.
pub trait EffectRule: Send + Sync {
    fn apply(&self, event: &Event, state: &mut ArenaState, ctx: &EffectContext) -> EventOutcome;
}

/// Resizes the dungeon after every handled event.
pub trait ResizeRule: Send + Sync {
    fn resize(&self, dungeon: &mut Dungeon, gladiators: &[Gladiator]);
}

impl ResizeRule for ShrinkPolicy {
    fn resize(&self, dungeon: &mut Dungeon, gladiators: &[Gladiator]) {
        dungeon.shrink(gladiators, *self);
    }
}

/// Read-only inputs an effect may need besides the state.
#[derive(Clone, Copy, Debug)]
pub struct EffectContext<'a> {
    pub dice: &'a Dice,
    pub combat: &'a CombatParams,
}

/// What happened when an event was executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum EventOutcome {
    Stayed,
    Moved {
        from: Position,
        to: Position,
    },
    Attacked {
        target: GladiatorId,
        result: AttackOutcome,
    },
    Focused {
        skill: Skill,
        applied: u32,
    },
    NoEffect {
        reason: NoEffectReason,
    },
}

impl EventOutcome {
    pub const fn no_effect(reason: NoEffectReason) -> Self {
        EventOutcome::NoEffect { reason }
    }
}

/// Why an event was absorbed without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NoEffectReason {
    OwnerDead,
    UnknownTarget,
    SelfTarget,
    TargetDead,
    OutOfRange,
    OutOfBounds,
    Occupied,
    BoostCapped,
}

/// The policy bundle of a game variant.
pub struct Rules {
    pub options: Box<dyn OptionRule>,
    pub effects: Box<dyn EffectRule>,
    pub resize: Box<dyn ResizeRule>,
}

impl Rules {
    pub fn new(
        options: impl OptionRule + 'static,
        effects: impl EffectRule + 'static,
        resize: impl ResizeRule + 'static,
    ) -> Self {
        Self {
            options: Box::new(options),
            effects: Box::new(effects),
            resize: Box::new(resize),
        }
    }

    /// Built-in rules of a variant.
    ///
    /// Both variants fight positionally; `Arena` shrinks to the tight box to
    /// force encounters, `Pit` leaves one tile of room on every side.
    pub fn for_variant(variant: Variant) -> Self {
        let policy = match variant {
            Variant::Arena => ShrinkPolicy::Tight,
            Variant::Pit => ShrinkPolicy::Padded,
        };
        Self::new(PositionalOptions::default(), PositionalEffects, policy)
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules").finish_non_exhaustive()
    }
}
