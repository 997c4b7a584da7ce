//! Combat resolution.
//!
//! Pure functions only: the caller supplies the rolls, these functions turn
//! them into a hit/miss decision and a damage number.
//!
//! - `calculate_hit_chance` / `check_hit`: accuracy vs evasion
//! - `calculate_damage`: damage minus protection plus variance
//! - `apply_damage`: HP reduction clamped to 0

pub mod damage;
pub mod hit;

pub use damage::{apply_damage, calculate_damage};
pub use hit::{calculate_hit_chance, check_hit};

/// Balance parameters for attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatParams {
    /// Hit chance (percent) when accuracy equals evasion.
    pub hit_base: u32,
    /// Percent per point of accuracy over evasion.
    pub hit_step: u32,
    pub hit_min: u32,
    pub hit_max: u32,
    /// Upper bound of the damage variance roll (inclusive).
    pub variance_max: u32,
}

impl CombatParams {
    pub const DEFAULT: Self = Self {
        hit_base: 70,
        hit_step: 5,
        hit_min: 5,
        hit_max: 95,
        variance_max: 1,
    };
}

impl Default for CombatParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rolls used by a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRolls {
    /// d100 roll for the hit check.
    pub hit: u32,
    /// Damage variance in `0..=variance_max`.
    pub variance: u32,
}

impl AttackRolls {
    /// Rolls that always hit with no variance.
    pub const SURE_HIT: Self = Self {
        hit: 1,
        variance: 0,
    };

    /// Rolls that always miss.
    pub const SURE_MISS: Self = Self {
        hit: 100,
        variance: 0,
    };
}

/// Outcome of a resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", rename_all = "snake_case"))]
pub enum AttackOutcome {
    Hit { damage: u32, killed: bool },
    Miss,
    /// Target out of range or either side dead.
    Ineffective,
}

impl AttackOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            AttackOutcome::Hit { damage, .. } => *damage,
            AttackOutcome::Miss | AttackOutcome::Ineffective => 0,
        }
    }
}
